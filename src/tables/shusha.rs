//! Shusha glyph assignments.

pub(super) const CHARS: &[(&str, &str)] = &[
    ("A", "अ"),
    ("B", "इ"),
    ("C", "उ"),
    ("D", "ऊ"),
    ("F", "ए"),
    ("G", "ऋ"),
    ("É", "क"),
    ("Ê", "ख"),
    ("È", "ग"),
    ("Ë", "घ"),
    ("Ì", "ङ"),
    ("Í", "च"),
    ("Î", "छ"),
    ("Ï", "ज"),
    ("Ð", "झ"),
    ("Ñ", "ञ"),
    ("Ò", "ट"),
    ("Ó", "ठ"),
    ("Ô", "ड"),
    ("Õ", "ढ"),
    ("Ö", "ण"),
    ("i", "त"),
    ("Ø", "थ"),
    ("Ù", "द"),
    ("Ú", "ध"),
    ("Û", "न"),
    ("Ü", "प"),
    ("Ý", "फ"),
    ("Þ", "ब"),
    ("ß", "भ"),
    ("à", "म"),
    ("á", "य"),
    ("®", "र"),
    ("ã", "ल"),
    ("ä", "व"),
    ("å", "श"),
    ("æ", "ष"),
    ("ç", "स"),
    ("è", "ह"),
    ("é", "ळ"),
    ("ê", "ा"),
    ("ë", "ि"),
    ("ì", "ी"),
    ("ú", "ु"),
    ("û", "ू"),
    ("î", "ृ"),
    ("ï", "े"),
    ("ð", "ै"),
    ("ñ", "ो"),
    ("ò", "ौ"),
    ("½", "्"),
    ("þ", "ं"),
    ("õ", "ँ"),
    ("ö", "ः"),
    ("÷", "़"),
    ("¤", "।"),
    ("¥", "॥"),
    ("0", "०"),
    ("1", "१"),
    ("2", "२"),
    ("3", "३"),
    ("4", "४"),
    ("5", "५"),
    ("6", "६"),
    ("7", "७"),
    ("8", "८"),
    ("9", "९"),
    (".", "."),
    (",", ","),
    ("!", "!"),
    ("?", "?"),
    (":", ":"),
    (";", ";"),
    ("-", "-"),
    ("(", "("),
    (")", ")"),
    ("/", "/"),
    ("+", "+"),
    ("=", "="),
    ("ø", "क्ष"),
    ("ù", "ज्ञ"),
    ("ó", "त्र"),
    ("ô", "श्र"),
];

pub(super) const LIGATURES: &[(&str, &str)] = &[
    ("AA", "आ"),
    ("BB", "ई"),
    ("CC", "ऊ"),
    ("FF", "ऐ"),
    ("ÉÉ®ú", "कार"),
    ("ÉÉ®úiÉ", "कारतक"),
    ("½þè", "्ंह"),
    ("êï", "ो"),
    ("êð", "ौ"),
    ("É½", "क्"),
    ("Ê½", "ख्"),
    ("È½", "ग्"),
    ("Ë½", "घ्"),
    ("Í½", "च्"),
    ("Ï½", "ज्"),
    ("i½", "त्"),
    ("Ù½", "द्"),
    ("Û½", "न्"),
    ("Ü½", "प्"),
    ("Ý½", "फ्"),
    ("Þ½", "ब्"),
    ("à½", "म्"),
    ("ã½", "ल्"),
    ("å½", "श्"),
    ("ç½", "स्"),
    ("è½", "ह्"),
];

pub(super) const HALF_FORMS: &[(&str, &str)] = &[
    ("\u{0080}", "क्"),
    ("\u{0081}", "ख्"),
    ("\u{0082}", "ग्"),
    ("\u{0083}", "घ्"),
    ("\u{0084}", "च्"),
    ("\u{0085}", "ज्"),
    ("\u{0086}", "झ्"),
    ("\u{0087}", "ञ्"),
    ("\u{0088}", "ट्"),
    ("\u{0089}", "ठ्"),
    ("\u{008A}", "ण्"),
    ("\u{008B}", "त्"),
    ("\u{008C}", "थ्"),
    ("\u{008D}", "द्"),
    ("\u{008E}", "ध्"),
    ("\u{008F}", "न्"),
    ("\u{0090}", "प्"),
    ("\u{0091}", "फ्"),
    ("\u{0092}", "ब्"),
    ("\u{0093}", "भ्"),
    ("\u{0094}", "म्"),
    ("\u{0095}", "य्"),
    ("\u{0096}", "ल्"),
    ("\u{0097}", "व्"),
    ("\u{0098}", "श्"),
    ("\u{0099}", "ष्"),
    ("\u{009A}", "स्"),
    ("\u{009B}", "ह्"),
    ("\u{009C}", "ळ्"),
];

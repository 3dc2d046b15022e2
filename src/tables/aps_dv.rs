//! APS-DV glyph assignments (newspaper composition, upper Latin-1 range).

pub(super) const CHARS: &[(&str, &str)] = &[
    ("¼", "अ"),
    ("½", "आ"),
    ("¾", "इ"),
    ("¿", "ई"),
    ("À", "उ"),
    ("Á", "ऊ"),
    ("Â", "ऋ"),
    ("Ã", "ए"),
    ("Ä", "ऐ"),
    ("Å", "ओ"),
    ("Æ", "औ"),
    ("Ç", "क"),
    ("È", "ख"),
    ("É", "ग"),
    ("Ê", "घ"),
    ("Ë", "ङ"),
    ("Ì", "च"),
    ("Í", "छ"),
    ("Î", "ज"),
    ("Ï", "झ"),
    ("Ð", "ञ"),
    ("Ñ", "ट"),
    ("Ò", "ठ"),
    ("Ó", "ड"),
    ("Ô", "ढ"),
    ("Õ", "ण"),
    ("Ö", "त"),
    ("×", "थ"),
    ("Ø", "द"),
    ("Ù", "ध"),
    ("Ú", "न"),
    ("Û", "प"),
    ("Ü", "फ"),
    ("Ý", "ब"),
    ("Þ", "भ"),
    ("ß", "म"),
    ("à", "य"),
    ("á", "र"),
    ("â", "ल"),
    ("ã", "व"),
    ("ä", "श"),
    ("å", "ष"),
    ("æ", "स"),
    ("ç", "ह"),
    ("è", "ळ"),
    ("é", "ा"),
    ("ê", "ि"),
    ("ë", "ी"),
    ("ì", "ु"),
    ("í", "ू"),
    ("î", "ृ"),
    ("ï", "े"),
    ("ð", "ै"),
    ("ñ", "ो"),
    ("ò", "ौ"),
    ("ó", "्"),
    ("ô", "ं"),
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
    ("ú", "त्र"),
    ("û", "श्र"),
];

pub(super) const LIGATURES: &[(&str, &str)] = &[
    ("Çó", "क्"),
    ("Èó", "ख्"),
    ("Éó", "ग्"),
    ("Êó", "घ्"),
    ("Ìó", "च्"),
    ("Îó", "ज्"),
    ("Öó", "त्"),
    ("Øó", "द्"),
    ("Úó", "न्"),
    ("Ûó", "प्"),
    ("Ýó", "ब्"),
    ("ßó", "म्"),
    ("âó", "ल्"),
    ("äó", "श्"),
    ("æó", "स्"),
    ("çó", "ह्"),
    ("éï", "ो"),
    ("éð", "ौ"),
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
    ("\u{0088}", "ण्"),
    ("\u{0089}", "त्"),
    ("\u{008A}", "थ्"),
    ("\u{008B}", "द्"),
    ("\u{008C}", "ध्"),
    ("\u{008D}", "न्"),
    ("\u{008E}", "प्"),
    ("\u{008F}", "फ्"),
    ("\u{0090}", "ब्"),
    ("\u{0091}", "भ्"),
    ("\u{0092}", "म्"),
    ("\u{0093}", "य्"),
    ("\u{0094}", "ल्"),
    ("\u{0095}", "व्"),
    ("\u{0096}", "श्"),
    ("\u{0097}", "ष्"),
    ("\u{0098}", "स्"),
    ("\u{0099}", "ह्"),
    ("\u{009A}", "ळ्"),
];

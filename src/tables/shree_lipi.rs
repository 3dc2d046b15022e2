//! Shree-Lipi glyph assignments (Modular InfoTech, Marathi publishing).

pub(super) const CHARS: &[(&str, &str)] = &[
    ("†", "अ"),
    ("‡", "आ"),
    ("ˆ", "इ"),
    ("‰", "ई"),
    ("Š", "उ"),
    ("‹", "ऊ"),
    ("Œ", "क्ष"),
    ("\u{008D}", "ए"),
    ("Ž", "ऐ"),
    ("\u{008F}", "ओ"),
    ("\u{0090}", "औ"),
    ("‘", "अं"),
    ("’", "अः"),
    ("¹", "क"),
    ("º", "ख"),
    ("»", "ग"),
    ("¼", "घ"),
    ("½", "ङ"),
    ("¾", "च"),
    ("¿", "छ"),
    ("À", "ज"),
    ("Á", "झ"),
    ("Â", "ञ"),
    ("Ã", "ट"),
    ("Ä", "ठ"),
    ("Å", "ड"),
    ("Æ", "ढ"),
    ("Ç", "ण"),
    ("È", "त"),
    ("É", "थ"),
    ("Ê", "द"),
    ("Ë", "ध"),
    ("Ì", "न"),
    ("Í", "प"),
    ("Î", "फ"),
    ("Ï", "ब"),
    ("Ð", "भ"),
    ("Ñ", "्"),
    ("Ò", "य"),
    ("Ó", "र"),
    ("Ô", "ल"),
    ("Õ", "व"),
    ("Ö", "ा"),
    ("×", "ि"),
    ("Ø", "ी"),
    ("Ù", "ु"),
    ("Ú", "ू"),
    ("Û", "ृ"),
    ("Ü", "े"),
    ("Ý", "ै"),
    ("Þ", "ो"),
    ("ß", "ौ"),
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
    ("ü", "्"),
    ("Ÿ", "ं"),
    ("\u{00A0}", "ः"),
    ("।", "।"),
    ("॥", "॥"),
    ("¡", "त्र"),
    ("–", "ज्ञ"),
];

pub(super) const LIGATURES: &[(&str, &str)] = &[
    ("Ö¸ü", "ार"),
    ("Ö®Ö", "ान"),
    ("´Ö", "मा"),
    ("Æü", "ढ"),
    ("®Ö", "न"),
    ("ÖμÖ", "ाय"),
    ("ÖÂ", "ाष"),
    ("™Òü", "ट्र"),
    ("†×", "अ"),
    ("×®Ö", "नि"),
    ("´ÖÆüÖ¸üÖÂ™Òü", "महाराष्ट्र"),
];

pub(super) const HALF_FORMS: &[(&str, &str)] = &[];

//! DVB-TT / DVBW-TT Surekh glyph assignments.
//!
//! Consonants are drawn as a head glyph followed by the `Ö` stem, which maps
//! to nothing on its own. Whole-word entries cover clusters the glyph-level
//! map cannot assemble.

pub(super) const CHARS: &[(&str, &str)] = &[
    ("Ò", "्र"),
    ("Î", "्र"),
    ("Ï", "्र"),
    ("Ð", "द्"),
    ("©", "द्व"),
    ("ª", "द्य"),
    ("«", "ट्ट"),
    ("'", "श्र"),
    ("“", "च"),
    ("–", "ह्य"),
    ("æ", "त्त"),
    ("î", "द्द"),
    ("†", "अ"),
    ("‡", "इ"),
    ("ˆ", "उ"),
    ("‰", "ऊ"),
    ("Û", "क"),
    ("Ü", "ख"),
    ("‹", "ख"),
    ("Ý", "ग"),
    ("à", "घ"),
    ("ã", "ङ"),
    ("¾", "व"),
    ("á", "छ"),
    ("•", "ज"),
    ("—", "झ"),
    ("¥", "ञ"),
    ("™", "ट"),
    ("š", "ठ"),
    ("›", "ड"),
    ("œ", ""),
    ("Þ", "ण"),
    ("Ÿ", "त"),
    ("É", "थ"),
    ("¤", "द"),
    ("¬", "ध"),
    ("®", "न"),
    ("¯", "प"),
    ("±", "फ"),
    ("²", "ब"),
    ("³", "भ"),
    ("´", "म"),
    ("μ", "य"),
    ("¸", "र"),
    ("»", "ल"),
    ("¹", "ळ"),
    ("¿", "श"),
    ("Â", "ष"),
    ("Ã", "स"),
    ("Æ", "ह"),
    ("Ê", "क्ष"),
    ("Ö", ""),
    ("×", "ि"),
    ("Ø", "ी"),
    ("ß", "ी"),
    ("Ù", "ु"),
    ("ò", "ू"),
    ("é", "ृ"),
    ("ê", "े"),
    ("ì", "ै"),
    ("ë", "ॅ"),
    ("ü", "्"),
    ("Ó", "ं"),
    ("Ô", "ः"),
    ("Õ", "ँ"),
    ("ú", ""),
    ("û", ""),
    ("§", "॥"),
    ("¦", "।"),
    ("·", "॰"),
    ("¡", "ड़"),
    ("£", "ण"),
    ("¨", "ऑ"),
    ("º", "ळ"),
    ("ó", "ू"),
    ("ô", "ृ"),
    ("õ", "े"),
    ("ý", "य"),
    ("þ", "र"),
    ("Œ", ""),
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
];

pub(super) const LIGATURES: &[(&str, &str)] = &[
    ("†Ó´Ö»Ö²Ö•ÖÖ¾ÖÞÖß", "अंमलबजावणी"),
    ("×¾Ö¬ÖÖ®Ö´ÖÓ›üôû", "विधानमंडळ"),
    ("¤êü¾Ö®ÖÖÝÖ¸üß", "देवनागरी"),
    ("´ÖÆüÖ¸üÖÂ™Òü", "महाराष्ट्र"),
    ("†×¬Ö×®ÖμÖ´Ö", "अधिनियम"),
    ("¸üÖ•Ö³ÖÖÂÖÖ", "राजभाषा"),
    ("ÃÖÓ×¾Ö¬ÖÖ®Ö", "संविधान"),
    ("ÛúÖμÖÖÔ»ÖμÖ", "कार्यालय"),
    ("×¾Ö¬ÖêμÖÛú", "विधेयक"),
    ("†×¬ÖÛúÖ¸ü", "अधिकार"),
    ("ÃÖ¸üÛúÖ¸ü", "सरकार"),
    ("¯ÖÏÖ¸Óü³Ö", "प्रारंभ"),
    ("ŸÖ¸üŸÖæ¤ü", "तरतूद"),
    ("×¤ü®ÖÖÓÛú", "दिनांक"),
    ("ÛÎú´ÖÖÓÛú", "क्रमांक"),
    ("×¾Ö³ÖÖÝÖ", "विभाग"),
    ("†®Öãêû¤ü", "अनुच्छेद"),
    ("´Ö×Æü»ÖÖ", "महिला"),
    ("´Ö¸üÖšüß", "मराठी"),
    ("ˆ¯Ö²ÖÓ¬Ö", "उपबंध"),
    ("ÃÖ×´ÖŸÖß", "समिती"),
    ("¿ÖÖÃÖ®Ö", "शासन"),
    ("×®ÖμÖ´Ö", "नियम"),
    ("¯Öã¹ýÂÖ", "पुरुष"),
    ("ÃÖ´ÖÖ®Ö", "समान"),
    ("Ûú»Ö´Ö", "कलम"),
    ("¯ÖÏ×ŸÖ", "प्रति"),
    ("¸üÖ•μÖ", "राज्य"),
    ("³ÖÖÂÖÖ", "भाषा"),
    ("×¾Ö×¬Ö", "विधि"),
    ("®μÖÖμÖ", "न्याय"),
    ("¯ÖéÂšü", "पृष्ठ"),
    ("ÛÎú", "क्र"),
    ("“ÖÔ", "र्च"),
    ("Ö‡Ô", "ई"),
    ("üÖê", "ो"),
    ("üÖì", "ौ"),
    ("ÛÎ", "क्र"),
    ("¦ü", "द्र"),
    ("Ã£", "स्थ"),
    ("ÐÖ", "द्ध"),
    ("ŸÖ", "त"),
    ("ÉÖ", "थ"),
    ("üÖ", "ा"),
    ("ÖÖ", "ा"),
    ("Öã", "ु"),
    ("Ö‡", "इ"),
];

pub(super) const HALF_FORMS: &[(&str, &str)] = &[];

//! Kruti-Dev (010 and later) glyph assignments.
//!
//! Kruti-Dev maps Devanagari onto plain ASCII, so most keys are letters.
//! Full consonants are usually the half form plus the `k` stem.

pub(super) const CHARS: &[(&str, &str)] = &[
    ("v", "अ"),
    ("b", "इ"),
    ("m", "उ"),
    ("Å", "ऊ"),
    (",", "ए"),
    ("d", "क"),
    ("x", "ग"),
    ("³", "ङ"),
    ("p", "च"),
    ("N", "छ"),
    ("t", "ज"),
    (">", "झ"),
    ("¥", "ञ"),
    ("V", "ट"),
    ("B", "ठ"),
    ("M", "ड"),
    ("<", "ढ"),
    ("r", "त"),
    ("n", "द"),
    ("u", "न"),
    ("i", "प"),
    ("Q", "फ"),
    ("c", "ब"),
    ("e", "म"),
    (";", "य"),
    ("j", "र"),
    ("y", "ल"),
    ("o", "व"),
    ("l", "स"),
    ("g", "ह"),
    ("G", "ळ"),
    ("k", "ा"),
    ("f", "ि"),
    ("h", "ी"),
    ("q", "ु"),
    ("w", "ू"),
    ("`", "ृ"),
    ("s", "े"),
    ("S", "ै"),
    ("~", "्"),
    ("a", "ं"),
    ("¡", "ँ"),
    ("%", "ः"),
    ("A", "।"),
    ("Þ", "॥"),
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
    ("=", "त्र"),
    ("K", "ज्ञ"),
    ("J", "श्र"),
    ("Ø", "क्र"),
    ("z", "्र"),
    ("Z", "र्"),
    ("+", "़"),
    ("‚", "ॉ"),
    ("W", "ॅ"),
    ("_", "ऋ"),
    ("|", "द्य"),
    ("}", "द्व"),
    (")", "द्ध"),
    ("¼", "("),
    ("½", ")"),
    ("-", "."),
    ("&", "-"),
];

pub(super) const LIGATURES: &[(&str, &str)] = &[
    ("vk", "आ"),
    ("bZ", "ई"),
    (",s", "ऐ"),
    ("vks", "ओ"),
    ("vkS", "औ"),
    ("[k", "ख"),
    ("?k", "घ"),
    (".k", "ण"),
    ("Fk", "थ"),
    ("/k", "ध"),
    ("Hk", "भ"),
    ("'k", "श"),
    ("\"k", "ष"),
    ("ks", "ो"),
    ("kS", "ौ"),
    ("Hkkjr", "भारत"),
    ("ns'k", "देश"),
    ("d`fr", "कृति"),
    ("gS", "है"),
    ("fd", "कि"),
    ("dh", "की"),
    ("esa", "में"),
    ("ls", "से"),
    ("dk", "का"),
    ("ds", "के"),
    ("dks", "को"),
    ("{k", "क्ष"),
    ("Vª", "ट्र"),
    ("Mª", "ड्र"),
    ("Ùk", "त्त"),
    ("Dr", "क्त"),
    ("v‚", "ऑ"),
    ("Dk", "क"),
    ("Xk", "ग"),
    ("Pk", "च"),
    ("Tk", "ज"),
    ("Rk", "त"),
    ("Uk", "न"),
    ("Ik", "प"),
    ("Ck", "ब"),
    ("Ek", "म"),
    ("Yk", "ल"),
    ("Ok", "व"),
    ("Lk", "स"),
];

pub(super) const HALF_FORMS: &[(&str, &str)] = &[
    ("D", "क्"),
    ("[", "ख्"),
    ("X", "ग्"),
    ("?", "घ्"),
    ("P", "च्"),
    ("T", "ज्"),
    ("R", "त्"),
    ("F", "थ्"),
    ("/", "ध्"),
    ("U", "न्"),
    ("I", "प्"),
    ("¶", "फ्"),
    ("C", "ब्"),
    ("H", "भ्"),
    ("E", "म्"),
    ("Y", "ल्"),
    ("O", "व्"),
    ("'", "श्"),
    ("\"", "ष्"),
    ("L", "स्"),
    ("{", "क्ष्"),
    ("Ù", "त्त्"),
];

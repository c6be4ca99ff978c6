//! Brazilian Portuguese number words.

/// Words for 0 through 19.
pub const UNITS: [&str; 20] = [
    "zero",
    "um",
    "dois",
    "três",
    "quatro",
    "cinco",
    "seis",
    "sete",
    "oito",
    "nove",
    "dez",
    "onze",
    "doze",
    "treze",
    "quatorze",
    "quinze",
    "dezesseis",
    "dezessete",
    "dezoito",
    "dezenove",
];

/// Words for 20, 30, ..., 90. Index 0 is twenty.
pub const TENS: [&str; 8] = [
    "vinte",
    "trinta",
    "quarenta",
    "cinquenta",
    "sessenta",
    "setenta",
    "oitenta",
    "noventa",
];

/// Hundreds stems for 100, 200, ..., 900. Index 0 is the "cento" stem used
/// for 101 through 199.
pub const HUNDREDS: [&str; 9] = [
    "cento",
    "duzentos",
    "trezentos",
    "quatrocentos",
    "quinhentos",
    "seiscentos",
    "setecentos",
    "oitocentos",
    "novecentos",
];

/// Exactly one hundred.
pub const HUNDRED: &str = "cem";

/// A power-of-one-thousand word with its number forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleWord {
    pub singular: &'static str,
    pub plural: &'static str,
}

impl ScaleWord {
    const fn new(singular: &'static str, plural: &'static str) -> Self {
        Self { singular, plural }
    }

    /// The form agreeing with a group value.
    pub fn for_group(self, group: u16) -> &'static str {
        if group == 1 { self.singular } else { self.plural }
    }
}

/// Scale words by level. Level 1 (thousand) is at index 0.
pub const SCALES: [ScaleWord; 11] = [
    ScaleWord::new("mil", "mil"),
    ScaleWord::new("milhão", "milhões"),
    ScaleWord::new("bilhão", "bilhões"),
    ScaleWord::new("trilhão", "trilhões"),
    ScaleWord::new("quatrilhão", "quatrilhões"),
    ScaleWord::new("quintilhão", "quintilhões"),
    ScaleWord::new("sextilhão", "sextilhões"),
    ScaleWord::new("septilhão", "septilhões"),
    ScaleWord::new("octilhão", "octilhões"),
    ScaleWord::new("nonilhão", "nonilhões"),
    ScaleWord::new("decilhão", "decilhões"),
];

/// Looks up the scale word for a group level. Level 0 has none.
pub fn scale(level: usize) -> Option<ScaleWord> {
    level.checked_sub(1).and_then(|i| SCALES.get(i).copied())
}

/// Singular form of the largest scale word.
pub fn largest_scale() -> &'static str {
    SCALES[SCALES.len() - 1].singular
}

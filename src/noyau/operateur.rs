// src/noyau/operateur.rs

/// Les quatre opérateurs binaires du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

impl Operateur {
    /// Symbole affiché sur la touche.
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Addition => "+",
            Operateur::Soustraction => "−",
            Operateur::Multiplication => "×",
            Operateur::Division => "÷",
        }
    }
}

/// a op b, en flottants. Aucun garde sur b == 0 ici : c’est l’appelant qui décide.
pub fn combiner(a: f64, op: Operateur, b: f64) -> f64 {
    match op {
        Operateur::Addition => a + b,
        Operateur::Soustraction => a - b,
        Operateur::Multiplication => a * b,
        Operateur::Division => a / b,
    }
}

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const NO_ANSWER: &str = "Pas de réponse définie pour cette question.";
pub const FAQ_PROMPT: &str = "Choisis une question ci-dessus pour afficher la lecture FEIS.";

/// Clickable canned question: `key` selects the answer, `label` is the chip caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqChip {
    pub key: &'static str,
    pub label: &'static str,
}

pub static FAQ_CHIPS: &[FaqChip] = &[
    FaqChip { key: "livret", label: "Livret ou ETF ?" },
    FaqChip { key: "risque", label: "Gérer le risque" },
    FaqChip { key: "crypto", label: "Quelle place pour la crypto ?" },
    FaqChip { key: "horizon", label: "C’est quoi un horizon ?" },
    FaqChip { key: "etf", label: "Pourquoi un ETF monde ?" },
];

static FAQ_ANSWERS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "livret",
            "<strong>Livret vs ETF :</strong><br/>\
            • Livret : sécurité, disponibilité, aucun risque de capital (hors inflation).<br/>\
            • ETF : actif de marché, valeur fluctuante, horizon plus long.<br/>\
            • On les met dans deux boîtes différentes : sécurité / projet de long terme.",
        ),
        (
            "risque",
            "<strong>Gérer le risque sans paniquer :</strong><br/>\
            • Ne jamais investir une épargne dont tu auras besoin à court terme.<br/>\
            • Fractionner les entrées (plans réguliers) pour lisser les points d’entrée.<br/>\
            • Comprendre que les baisses font partie de la mécanique du marché.",
        ),
        (
            "crypto",
            "<strong>Place de la crypto :</strong><br/>\
            • Poche expérimentale, pas cœur de portefeuille.<br/>\
            • Importance de connaître le risque de perte élevé et la volatilité.<br/>\
            • On ne la travaille qu’après avoir structuré le reste (cash + ETF).",
        ),
        (
            "horizon",
            "<strong>Horizon de placement :</strong><br/>\
            • Plus l’horizon est long, plus l’exposition aux actions peut être importante.<br/>\
            • L’horizon sert à choisir les outils (livret, obligations, actions, mix...).<br/>\
            • C’est une des premières questions abordées en atelier FEIS.",
        ),
        (
            "etf",
            "<strong>ETF monde :</strong><br/>\
            • Réplique un panier d’actions de nombreux pays développés.<br/>\
            • Permet de ne pas parier sur un seul pays ou un seul secteur.<br/>\
            • C’est souvent la “brique de base” étudiée en club pour le long terme.",
        ),
    ])
});

pub fn lookup(key: &str) -> Option<&'static str> {
    FAQ_ANSWERS.get(key).copied()
}

/// Answer panel content for a chip key; unknown keys get [`NO_ANSWER`].
pub fn answer_for_chip(key: &str) -> &'static str {
    lookup(key).unwrap_or(NO_ANSWER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_chip_has_an_answer() {
        for chip in FAQ_CHIPS {
            assert!(lookup(chip.key).is_some(), "{}", chip.key);
        }
    }

    #[test]
    fn keys_are_case_sensitive() {
        assert_eq!(answer_for_chip("Crypto"), NO_ANSWER);
        assert!(answer_for_chip("crypto").starts_with("<strong>Place de la crypto :</strong>"));
    }
}

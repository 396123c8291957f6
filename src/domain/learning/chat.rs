use strum::{Display, EnumIter};

/// Topic a free-text question resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ChatTopic {
    Livret,
    Crypto,
    Risque,
    Horizon,
    Etf,
}

/// One keyword group: any keyword appearing in the lowercased question selects `answer`.
#[derive(Debug)]
pub struct KeywordRule {
    pub topic: ChatTopic,
    pub keywords: &'static [&'static str],
    pub answer: &'static str,
}

impl KeywordRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Evaluated top to bottom, first match wins. "crypto" is checked before
/// "risque", so a question mentioning both gets the crypto answer.
pub static KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        topic: ChatTopic::Livret,
        keywords: &["livret", "pel"],
        answer: "<strong>Lecture FEIS – Livret vs ETF :</strong><br/>\
            • Le livret = poche de sécurité liquide, horizon très court, taux connu.<br/>\
            • L’ETF actions = actif de marché, horizon long (10 ans et +), valeur qui varie.<br/>\
            • On compare rarement les deux : on définit d’abord la poche sécurité, puis on réfléchit à la poche marché.",
    },
    KeywordRule {
        topic: ChatTopic::Crypto,
        keywords: &["crypto"],
        answer: "<strong>Lecture FEIS – Crypto :</strong><br/>\
            • Classe d’actifs très volatile, non indispensable pour démarrer.<br/>\
            • On la traite comme poche “labo” limitée (ex : quelques % du patrimoine investissable).<br/>\
            • Avant la crypto : cash, livret, puis ETF diversifiés bien compris.",
    },
    KeywordRule {
        topic: ChatTopic::Risque,
        keywords: &["risque", "perdre"],
        answer: "<strong>Lecture FEIS – Gérer le risque :</strong><br/>\
            • On commence par définir ce que tu ne veux pas perdre (épargne de précaution).<br/>\
            • Ensuite seulement, on décide ce qui peut être exposé aux marchés.<br/>\
            • Outil clé : horizon de temps et pourcentage max acceptable de baisse temporaire.",
    },
    KeywordRule {
        topic: ChatTopic::Horizon,
        keywords: &["horizon", "long terme", "court terme"],
        answer: "<strong>Lecture FEIS – Horizon :</strong><br/>\
            • Court terme (&lt; 3 ans) : on reste majoritairement hors marché, livret / cash.<br/>\
            • Moyen terme (3–7 ans) : on peut envisager une poche diversifiée prudente.<br/>\
            • Long terme (10 ans et +) : ETF monde / indices larges prennent du sens.",
    },
    KeywordRule {
        topic: ChatTopic::Etf,
        keywords: &["etf"],
        answer: "<strong>Lecture FEIS – ETF :</strong><br/>\
            • Un ETF réplique un indice (ex : MSCI World, S&P 500).<br/>\
            • L’intérêt : diversification, frais souvent bas, transparence de l’indice suivi.<br/>\
            • Le point clé n’est pas le “meilleur ETF”, mais la construction globale du portefeuille.",
    },
];

pub const FALLBACK_ANSWER: &str = "<strong>Réponse FEIS :</strong><br/>\
    Ta question touche à plusieurs thèmes. On la traiterait en club avec :<br/>\
    • horizon (court / moyen / long terme),<br/>\
    • tolérance au risque et épargne de précaution,<br/>\
    • rôle des indices / ETF par rapport au cash.<br/>\
    Reformule avec un mot clé (livret, ETF, crypto, risque, horizon) pour une réponse plus précise.";

pub fn match_rule(question: &str) -> Option<&'static KeywordRule> {
    let lowered = question.to_lowercase();
    KEYWORD_RULES.iter().find(|rule| rule.matches(&lowered))
}

pub fn matched_topic(question: &str) -> Option<ChatTopic> {
    match_rule(question).map(|rule| rule.topic)
}

/// Canned HTML answer for a question, or the generic fallback.
pub fn answer_for_question(question: &str) -> &'static str {
    match_rule(question).map_or(FALLBACK_ANSWER, |rule| rule.answer)
}

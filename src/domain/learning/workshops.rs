/// Workshop card content. `text` may carry HTML entities and is rendered as markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workshop {
    pub tag: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub static WORKSHOPS: &[Workshop] = &[
    Workshop {
        tag: "Atelier marchés",
        title: "Lire une journée de marché",
        text: "On suit CAC 40, S&amp;P 500, taux &amp; change sur une séance. Objectif : relier événements, indices et courbes.",
    },
    Workshop {
        tag: "Allocation",
        title: "Construire une base ETF + cash",
        text: "Cas pratique pour un étudiant : livret de sécurité, poche ETF monde, discussion sur le risque assumé.",
    },
    Workshop {
        tag: "Macro / banques centrales",
        title: "Comprendre une annonce de la BCE ou de la Fed",
        text: "Lecture d’un communiqué, impact potentiel sur les indices, la courbe des taux et la devise.",
    },
    Workshop {
        tag: "Crypto labo",
        title: "Traiter la crypto comme un laboratoire",
        text: "On cartographie les risques et les scénarios sans la présenter comme solution miracle.",
    },
];

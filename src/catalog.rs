use serde::{Deserialize, Serialize};

/// Cards without a mapped link fall back to the site root.
pub const FALLBACK_URL: &str = "https://raspabolada.bet";

/// Built-in card list, in display order, with the outbound link per card.
const BUILTIN_CARDS: &[(&str, &str)] = &[
    ("Raspadinha Tudo ou Nada", "https://raspabolada.bet/raspadinhas/show.php?id=18"),
    ("Raspadinha Minotauro", "https://raspabolada.bet/raspadinhas/show.php?id=17"),
    ("Raspadinha Show Ball", "https://raspabolada.bet/raspadinhas/show.php?id=16"),
    ("Raspadinha Pescador", "https://raspabolada.bet/raspadinhas/show.php?id=15"),
    ("Raspadinha Arrancada", "https://raspabolada.bet/raspadinhas/show.php?id=14"),
    ("Raspadinha Tigrinho", "https://raspabolada.bet/raspadinhas/show.php?id=12"),
    ("Raspadinha Rihappy", "https://raspabolada.bet/raspadinhas/show.php?id=11"),
    ("Raspadinha Honda", "https://raspabolada.bet/raspadinhas/show.php?id=10"),
    ("Raspadinha Decolar", "https://raspabolada.bet/raspadinhas/show.php?id=9"),
    ("Raspadinha Casas Bahia", "https://raspabolada.bet/raspadinhas/show.php?id=8"),
    ("Raspadinha WePink", "https://raspabolada.bet/raspadinhas/show.php?id=7"),
    ("Raspadinha iFood", "https://raspabolada.bet/raspadinhas/show.php?id=6"),
    ("Raspadinha Pix na Conta", "https://raspabolada.bet/raspadinhas/show.php?id=5"),
    ("Raspadinha do Bicho", "https://raspabolada.bet/raspadinhas/show.php?id=4"),
    ("Raspadinha Amazon", "https://raspabolada.bet/raspadinhas/show.php?id=1"),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardEntry {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub cards: Vec<CardEntry>,
    #[serde(default = "default_fallback_url")]
    pub fallback_url: String,
}

fn default_fallback_url() -> String {
    FALLBACK_URL.to_string()
}

impl Catalog {
    pub fn builtin() -> Self {
        Catalog {
            cards: BUILTIN_CARDS
                .iter()
                .map(|(name, url)| CardEntry {
                    name: (*name).to_string(),
                    url: (*url).to_string(),
                })
                .collect(),
            fallback_url: default_fallback_url(),
        }
    }

    /// Loads a catalog override from `path`, falling back to the built-in
    /// list when the file is absent, unreadable, or not valid JSON.
    pub fn load(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str::<Catalog>(&data) {
                Ok(catalog) if !catalog.cards.is_empty() => {
                    log::info!("loaded {} cards from {path}", catalog.cards.len());
                    catalog
                }
                Ok(_) => {
                    log::warn!("{path} has no cards, using built-in catalog");
                    Self::builtin()
                }
                Err(err) => {
                    log::warn!("ignoring malformed {path}: {err}");
                    Self::builtin()
                }
            },
            Err(_) => Self::builtin(),
        }
    }

    /// Outbound link for a card, or the fallback URL when unmapped.
    pub fn url_for(&self, name: &str) -> &str {
        self.cards
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.url.as_str())
            .unwrap_or(&self.fallback_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_has_fifteen_cards() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.cards.len(), 15);
        assert_eq!(catalog.cards[0].name, "Raspadinha Tudo ou Nada");
        assert_eq!(catalog.cards[14].name, "Raspadinha Amazon");
    }

    #[test]
    fn url_for_known_card() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.url_for("Raspadinha Amazon"),
            "https://raspabolada.bet/raspadinhas/show.php?id=1"
        );
    }

    #[test]
    fn unknown_card_resolves_to_fallback() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.url_for("Raspadinha Inexistente"), FALLBACK_URL);
    }

    #[test]
    fn missing_file_falls_back_to_builtin() {
        let catalog = Catalog::load("does_not_exist.json");
        assert_eq!(catalog.cards.len(), 15);
    }

    #[test]
    fn malformed_file_falls_back_to_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let catalog = Catalog::load(file.path().to_str().unwrap());
        assert_eq!(catalog.cards.len(), 15);
    }

    #[test]
    fn override_file_replaces_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"cards":[{{"name":"Raspadinha Teste","url":"https://example.com/1"}}]}}"#
        )
        .unwrap();
        let catalog = Catalog::load(file.path().to_str().unwrap());
        assert_eq!(catalog.cards.len(), 1);
        assert_eq!(catalog.url_for("Raspadinha Teste"), "https://example.com/1");
        // fallback_url is defaulted when the override omits it
        assert_eq!(catalog.url_for("Outra"), FALLBACK_URL);
    }
}

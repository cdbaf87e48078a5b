// src/search/lexicon.rs

/// Static word lists used by the query parser. Entries are stored already
/// normalized (lowercase, no accents) so they compare directly against
/// normalized query words.
#[derive(Debug)]
pub struct Lexicon {
    pub rental: &'static [&'static str],
    pub sale: &'static [&'static str],
    pub stopwords: &'static [&'static str],
}

/// Brazilian Portuguese lexicon, with the few English words visitors type.
pub static PORTUGUESE: Lexicon = Lexicon {
    rental: &[
        "alugar", "aluguel", "alugo", "alugando", "locacao", "locar", "arrendar",
        "rent", "rental",
    ],
    sale: &[
        "comprar", "compra", "compro", "comprando", "venda", "vender", "vendo",
        "buy", "sale",
    ],
    stopwords: &[
        "quero", "queria", "procuro", "procurando", "busco", "preciso", "gostaria",
        "de", "da", "do", "das", "dos", "em", "no", "na", "nos", "nas", "um", "uma",
        "uns", "umas", "os", "as", "para", "pra", "por", "com", "que", "perto",
        "ao", "aos", "and", "the", "in", "for",
    ],
};

impl Lexicon {
    pub fn is_rental(&self, word: &str) -> bool {
        self.rental.iter().any(|w| *w == word)
    }

    pub fn is_sale(&self, word: &str) -> bool {
        self.sale.iter().any(|w| *w == word)
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.iter().any(|w| *w == word)
    }
}

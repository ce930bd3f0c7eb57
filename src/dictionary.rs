//! Offline phrase dictionary used when no online provider answers.
//!
//! Lookup is an exact match on the normalized input, otherwise a
//! sequential substring replacement. Replacements run longest key first
//! (ties broken by key order) and each one operates on the text left by
//! the previous ones, so overlapping keys resolve to the longest phrase.

use std::collections::{BTreeMap, HashMap};

const BUILTIN_PHRASES: &[(&str, &str)] = &[
    // Greetings and courtesy
    ("halo", "hello"),
    ("hai", "hi"),
    ("apa kabar", "how are you"),
    ("selamat pagi", "good morning"),
    ("selamat siang", "good afternoon"),
    ("selamat sore", "good evening"),
    ("selamat malam", "good night"),
    ("selamat tinggal", "goodbye"),
    ("selamat datang", "welcome"),
    ("sampai jumpa", "see you"),
    ("terima kasih", "thank you"),
    ("terima kasih banyak", "thank you very much"),
    ("sama-sama", "you're welcome"),
    ("maaf", "sorry"),
    ("permisi", "excuse me"),
    ("tolong", "please help"),
    ("silakan", "please"),
    ("tidak", "no"),
    ("baik", "good"),
    ("baik-baik saja", "fine"),
    ("saja", "just"),
    ("semoga", "hopefully"),
    ("atas bantuan", "for the help"),
    // People
    ("saya", "i"),
    ("aku", "i"),
    ("kamu", "you"),
    ("anda", "you"),
    ("kami", "we"),
    ("mereka", "they"),
    ("nama saya", "my name is"),
    ("siapa nama anda", "what is your name"),
    ("teman", "friend"),
    ("keluarga", "family"),
    ("ibu", "mother"),
    ("ayah", "father"),
    ("kakak", "older sibling"),
    ("adik", "younger sibling"),
    // Questions
    ("siapa", "who"),
    ("apa", "what"),
    ("di mana", "where"),
    ("kapan", "when"),
    ("mengapa", "why"),
    ("bagaimana", "how"),
    ("berapa", "how much"),
    // Everyday words
    ("rumah", "house"),
    ("sekolah", "school"),
    ("stasiun kereta", "train station"),
    ("terdekat", "nearest"),
    ("makan", "eat"),
    ("minum", "drink"),
    ("air", "water"),
    ("nasi", "rice"),
    ("buku", "book"),
    ("cinta", "love"),
    ("senang", "happy"),
    ("sedih", "sad"),
    ("besar", "big"),
    ("kecil", "small"),
    ("menyenangkan", "pleasant"),
    ("harimu", "your day"),
    // Time
    ("hari ini", "today"),
    ("besok", "tomorrow"),
    ("kemarin", "yesterday"),
    ("sekarang", "now"),
    ("sedang", "currently"),
    // Language and activities
    ("bahasa indonesia", "indonesian"),
    ("bahasa inggris", "english"),
    ("belajar", "learn"),
    ("bekerja", "work"),
    ("pergi", "go"),
    ("datang", "come"),
];

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Read-only Indonesian → English phrase table
#[derive(Debug, Clone)]
pub struct PhraseDictionary {
    entries: HashMap<String, String>,
    /// Keys by length descending, then lexicographically
    replacement_order: Vec<(String, String)>,
}

impl PhraseDictionary {
    /// Build from arbitrary phrases. Keys are normalized; entries with a
    /// blank key or a blank value are dropped.
    pub fn new<I, K, V>(phrases: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut entries = HashMap::new();
        for (key, value) in phrases {
            let key = normalize(key.as_ref());
            let value: String = value.into();
            if key.is_empty() || value.trim().is_empty() {
                continue;
            }
            entries.insert(key, value);
        }

        let mut replacement_order: Vec<(String, String)> = entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        replacement_order.sort_by(|(a, _), (b, _)| {
            b.chars().count().cmp(&a.chars().count()).then_with(|| a.cmp(b))
        });

        Self {
            entries,
            replacement_order,
        }
    }

    /// The built-in table
    pub fn builtin() -> Self {
        Self::new(BUILTIN_PHRASES.iter().copied())
    }

    /// The built-in table with `extra` phrases added or overriding
    pub fn with_extra(extra: &BTreeMap<String, String>) -> Self {
        Self::new(
            BUILTIN_PHRASES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .chain(extra.iter().map(|(k, v)| (k.clone(), v.clone()))),
        )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Translate `text` with the table. Never fails; unknown text comes
    /// back lowercased and trimmed.
    pub fn lookup(&self, text: &str) -> String {
        let mut result = normalize(text);

        if let Some(exact) = self.entries.get(&result) {
            return exact.clone();
        }

        for (key, value) in &self.replacement_order {
            if result.contains(key.as_str()) {
                result = result.replace(key.as_str(), value);
            }
        }

        result
    }
}

impl Default for PhraseDictionary {
    fn default() -> Self {
        Self::builtin()
    }
}

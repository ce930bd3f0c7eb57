/// Example Indonesian texts offered as quick-fill choices
pub const SAMPLE_TEXTS: &[&str] = &[
    "Halo, apa kabar?",
    "Selamat pagi, semoga harimu menyenangkan.",
    "Terima kasih atas bantuan Anda.",
    "Saya sedang belajar bahasa Inggris.",
    "Di mana stasiun kereta terdekat?",
];

/// Sample by 1-based position, as shown to the user
pub fn sample(number: usize) -> Option<&'static str> {
    number.checked_sub(1).and_then(|idx| SAMPLE_TEXTS.get(idx).copied())
}

use rand::Rng;

/// "Did you know" facts shown in the results area before the first analysis.
pub const NUTRITION_FACTS: [&str; 10] = [
    "Tahukah Kamu? Konsumsi air yang cukup sangat penting untuk menjaga fungsi tubuh dan metabolisme!",
    "Tahukah Kamu? Serat dari buah dan sayur membantu pencernaan dan menjaga kadar gula darah stabil.",
    "Tahukah Kamu? Protein tidak hanya membangun otot, tapi juga penting untuk enzim dan hormon tubuh!",
    "Tahukah Kamu? Lemak sehat seperti dari alpukat dan kacang-kacangan esensial untuk otak dan penyerapan vitamin.",
    "Tahukah Kamu? Vitamin C, yang banyak di jeruk, adalah antioksidan kuat untuk kekebalan tubuh.",
    "Tahukah Kamu? Kurangi gula tambahan, karena dapat meningkatkan risiko penyakit kronis.",
    "Tahukah Kamu? Sarapan adalah kunci untuk memulai metabolisme Anda di pagi hari!",
    "Tahukah Kamu? Tidur yang cukup sama pentingnya dengan nutrisi untuk kesehatan optimal.",
    "Tahukah Kamu? Warna-warni di piring Anda berarti lebih banyak nutrisi dan antioksidan berbeda!",
    "Tahukah Kamu? Kalsium dari susu atau sayuran hijau penting untuk tulang yang kuat sepanjang hidup.",
];

pub fn random_fact<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    NUTRITION_FACTS[rng.gen_range(0..NUTRITION_FACTS.len())]
}

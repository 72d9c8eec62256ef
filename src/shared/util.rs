use rand::seq::SliceRandom;

const EMOJI_LIST: [&str; 14] = [
    "😭", "😄", "😌", "🤓", "😎", "😤", "🤖", "😶‍🌫️", "🌏", "📸", "💿", "👋", "🌊", "✨",
];

pub fn get_random_emoji() -> &'static str {
    let mut rng = rand::thread_rng();
    EMOJI_LIST.choose(&mut rng).copied().unwrap_or("✨")
}

use std::collections::HashSet;
use std::path::Path;
use tokio::fs;
use anyhow::Result;
use once_cell::sync::Lazy;

use crate::game::GameError;

/// Default catalogue of candidate words
static BUILTIN_WORDS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "animal", "auto", "anecdote", "alphabet", "all", "awesome", "arise", "balloon", "basket",
        "bench", "best", "birthday", "book", "briefcase", "camera", "camping", "candle", "cat",
        "cauliflower", "chat", "children", "class", "classic", "classroom", "coffee", "colorful",
        "cookie", "creative", "cruise", "dance", "daytime", "dinosaur", "doorknob", "dine",
        "dream", "dusk", "eating", "elephant", "emerald", "eerie", "electric", "finish",
        "flowers", "follow", "fox", "frame", "free", "frequent", "funnel", "green", "guitar",
        "grocery", "glass", "great", "giggle", "haircut", "half", "homemade", "happen", "honey",
        "hurry", "hundred", "ice", "igloo", "invest", "invite", "icon", "introduce", "joke",
        "jovial", "journal", "jump", "join", "kangaroo", "keyboard", "kitchen", "koala", "kind",
        "kaleidoscope", "landscape", "late", "laugh", "learning", "lemon", "letter", "lily",
        "magazine", "marine", "marshmallow", "maze", "meditate", "melody", "minute", "monument",
        "moon", "motorcycle", "mountain", "music", "north", "nose", "night", "name", "never",
        "negotiate", "number", "opposite", "octopus", "oak", "order", "open", "polar", "pack",
        "painting", "person", "picnic", "pillow", "pizza", "podcast", "presentation", "puppy",
        "puzzle", "recipe", "release", "restaurant", "revolve", "rewind", "room", "run",
        "secret", "seed", "ship", "shirt", "should", "small", "spaceship", "stargazing", "skill",
        "street", "style", "sunrise", "taxi", "tidy", "timer", "together", "tooth", "tourist",
        "travel", "truck", "under", "useful", "unicorn", "unique", "uplift", "uniform", "vase",
        "violin", "visitor", "vision", "volume", "view", "walrus", "wander", "world", "winter",
        "well", "whirlwind", "x-ray", "xylophone", "yoga", "yogurt", "yoyo", "you", "year",
        "yummy", "zebra", "zigzag", "zoology", "zone", "zeal",
    ]
});

/// Read-only source of candidate words for a game.
///
/// Words are trimmed and lowercased; duplicates are dropped keeping the
/// first occurrence, so `len` is the number of distinct words a session
/// can draw from.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build a word list from any collection of words
    pub fn from_words<I, S>(words: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let words: Vec<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .filter(|word| seen.insert(word.clone()))
            .collect();

        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }

        Ok(Self { words })
    }

    /// Load a word list from a file, one word per line
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let list = Self::from_words(content.lines())?;

        tracing::info!("Loaded {} words into word list", list.len());

        Ok(list)
    }

    /// The default catalogue shipped with the game
    pub fn builtin() -> Self {
        Self {
            words: BUILTIN_WORDS.iter().map(|word| word.to_string()).collect(),
        }
    }

    /// Get the number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

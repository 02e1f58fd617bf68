//! Profile content shown on the page

use serde::{Deserialize, Serialize};

/// Social network a link points to. Decides the card colours and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialKind {
    Github,
    SoundCloud,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Used for the window title
    pub name: String,
    pub bio: String,
    pub lyrics: Vec<String>,
    pub avatar_url: String,
    pub socials: Vec<SocialLink>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Nem".to_string(),
            bio: "Hello, my name is Nem, I am currently an Android developer, and also an \
                  amateur electronic music producer. I like listening to electronic music \
                  and rock, and I am also learning Japanese."
                .to_string(),
            lyrics: [
                "陽射しを吸い込んで眺め",
                "この世の果てを見せて欲しいから",
                "まだ息をしていてほしいだけ",
                "昔聴いた曲の名前は",
                "もう忘れてしまったから",
                "ポケットにしまっていた",
                "心に触れていく",
                "It's still hurting",
                "I'm too worthless",
                "Try to hide it, but",
                "I can't make it",
                "Too heavy for my heart",
                "Scream out loud",
                "Saying goodbye",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            avatar_url: "https://avatars.githubusercontent.com/u/31311826?v=4".to_string(),
            socials: vec![
                SocialLink {
                    kind: SocialKind::Github,
                    label: "Github".to_string(),
                    url: "https://github.com/whitescent".to_string(),
                },
                SocialLink {
                    kind: SocialKind::SoundCloud,
                    label: "SoundCloud".to_string(),
                    url: "https://soundcloud.com/lovetheeif/tracks".to_string(),
                },
            ],
        }
    }
}

impl Profile {
    /// Lyrics as one block, one line per entry
    pub fn lyrics_text(&self) -> String {
        self.lyrics.join("\n")
    }
}

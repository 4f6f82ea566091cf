use serde::{Deserialize, Serialize};

/// One portfolio entry. Field names serialize in camelCase so records typed
/// into the browser console (`githubLink`, `liveLink`) deserialize as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub techs: Vec<String>,
    #[serde(default)]
    pub features: String,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub live_link: Option<String>,
}

impl ProjectRecord {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            techs: Vec::new(),
            features: String::new(),
            github_link: None,
            live_link: None,
        }
    }

    pub fn techs<T: Into<String>>(mut self, techs: impl IntoIterator<Item = T>) -> Self {
        self.techs = techs.into_iter().map(Into::into).collect();
        self
    }

    pub fn features(mut self, features: impl Into<String>) -> Self {
        self.features = features.into();
        self
    }

    pub fn github_link(mut self, link: impl Into<String>) -> Self {
        self.github_link = Some(link.into());
        self
    }

    pub fn live_link(mut self, link: impl Into<String>) -> Self {
        self.live_link = Some(link.into());
        self
    }
}

/// Projects shown on first load.
pub fn seed_projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord::new("Bank System", "Training project on the principles of OOP")
            .techs(["C++", "Console", "OOP"])
            .features(
                "System logic analysis and construction, Practical application of OOP, \
                 Data management without a database.",
            )
            .github_link("https://github.com/q-hBar/Simple-Bank-Project"),
        ProjectRecord::new(
            "Security Playground",
            "Learn about web security vulnerabilities through interactive examples",
        )
        .techs(["HTML", "CSS", "JS"])
        .features(
            "Interactive CTF Challenges, Multiple Web Security Categories, \
             Built-in Solutions for Learning",
        )
        .live_link("https://q-hbar.github.io/CTF-Challenges/"),
    ]
}

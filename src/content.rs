//! Static portfolio data. Display text lives in the catalogs; entries here
//! only carry catalog keys, links and numbers.

pub const OWNER_NAME: &str = "Gorgui Marena";
pub const GITHUB_URL: &str = "https://github.com/gorguimarena";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/gorgui-mar%C3%A9na-2068b425b";
pub const CV_PATH: &str = "/GorguiMarenaCV.pdf";

/// Number of skills shown before "show all" is toggled.
pub const SKILL_PREVIEW_LEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Languages,
    Tools,
    Concepts,
    SoftSkills,
}

impl SkillCategory {
    pub fn all() -> [SkillCategory; 4] {
        [Self::Languages, Self::Tools, Self::Concepts, Self::SoftSkills]
    }

    pub fn catalog_key(&self) -> &'static str {
        match self {
            Self::Languages => "skills.languages",
            Self::Tools => "skills.tools",
            Self::Concepts => "skills.concepts",
            Self::SoftSkills => "skills.softSkills",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Percentage, 0 to 100.
    pub level: u8,
    pub category: SkillCategory,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "PHP", level: 85, category: SkillCategory::Languages },
    Skill { name: "JavaScript", level: 80, category: SkillCategory::Languages },
    Skill { name: "SQL", level: 75, category: SkillCategory::Concepts },
    Skill { name: "Git", level: 80, category: SkillCategory::Tools },
    Skill { name: "Docker", level: 70, category: SkillCategory::Tools },
    Skill { name: "JSON Server", level: 65, category: SkillCategory::Tools },
    Skill { name: "POO", level: 75, category: SkillCategory::Concepts },
    Skill { name: "API REST", level: 70, category: SkillCategory::Concepts },
    Skill { name: "Base de données relationnelles", level: 75, category: SkillCategory::Concepts },
    Skill { name: "Travail en équipe", level: 90, category: SkillCategory::SoftSkills },
    Skill { name: "Autonomie", level: 85, category: SkillCategory::SoftSkills },
    Skill { name: "Gestion de projet", level: 80, category: SkillCategory::SoftSkills },
];

pub fn preview_skills() -> &'static [Skill] {
    &SKILLS[..SKILL_PREVIEW_LEN.min(SKILLS.len())]
}

/// Skills grouped by category, in category order, empty groups skipped.
pub fn skills_by_category() -> Vec<(SkillCategory, Vec<Skill>)> {
    SkillCategory::all()
        .into_iter()
        .map(|cat| {
            let skills = SKILLS
                .iter()
                .filter(|s| s.category == cat)
                .copied()
                .collect::<Vec<_>>();
            (cat, skills)
        })
        .filter(|(_, skills)| !skills.is_empty())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    /// Catalog prefix, e.g. `certifications.items.devops1`.
    pub id: &'static str,
    pub link: &'static str,
    pub category: &'static str,
}

impl Certification {
    pub fn title_key(&self) -> String {
        format!("certifications.items.{}.title", self.id)
    }

    pub fn provider_key(&self) -> String {
        format!("certifications.items.{}.provider", self.id)
    }

    pub fn date_key(&self) -> String {
        format!("certifications.items.{}.date", self.id)
    }

    pub fn category_key(&self) -> String {
        format!("certifications.category.{}", self.category)
    }
}

// DevOps and system first
pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        id: "devops1",
        link: "https://coursera.org/share/ee3147a5d02c4911be1a7daafab3215e",
        category: "devops",
    },
    Certification {
        id: "devops2",
        link: "https://coursera.org/share/d480b8dc4d4ec80edcca357c8a262852",
        category: "devops",
    },
    Certification {
        id: "system1",
        link: "https://coursera.org/share/ac2fa720e45cc0dca9b43a360ef62e72",
        category: "system",
    },
    Certification {
        id: "devops3",
        link: "https://www.coursera.org/projects/linux-io-redirection-for-devops",
        category: "devops",
    },
    Certification {
        id: "webdev1",
        link: "https://coursera.org/share/6dc2d46b30a581a420629ad15a1b9d36",
        category: "webdev",
    },
    Certification {
        id: "ai1",
        link: "https://coursera.org/share/5a1f0a20d56584419af92c5f35e8733f",
        category: "ai",
    },
    Certification {
        id: "webdev2",
        link: "https://coursera.org/share/6cc2e2d9189f52c2354e9c6e55be6e3f",
        category: "webdev",
    },
    Certification {
        id: "backend1",
        link: "https://coursera.org/share/d79408b3d16df4279508b7465adb23d6",
        category: "backend",
    },
    Certification {
        id: "programming1",
        link: "https://coursera.org/share/5f785dee4d34694bd22df85df98104ac",
        category: "programming",
    },
    Certification {
        id: "programming2",
        link: "https://coursera.org/share/b6989a3db332d592dd7452fa4ecdb688",
        category: "programming",
    },
    Certification {
        id: "design1",
        link: "https://coursera.org/share/b045de4c7878a6c7d1bed9b89198c990",
        category: "design",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Done,
    InProgress,
}

impl ProjectStatus {
    pub fn catalog_key(&self) -> &'static str {
        match self {
            Self::Done => "projects.status.done",
            Self::InProgress => "projects.status.inProgress",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub status: ProjectStatus,
}

impl Project {
    pub fn title_key(&self) -> String {
        format!("projects.{}.title", self.id)
    }

    pub fn description_key(&self) -> String {
        format!("projects.{}.description", self.id)
    }

    pub fn tech_key(&self) -> String {
        format!("projects.{}.tech", self.id)
    }
}

pub const PROJECTS: &[Project] = &[
    Project { id: "student", status: ProjectStatus::Done },
    Project { id: "ai", status: ProjectStatus::Done },
    Project { id: "todo", status: ProjectStatus::Done },
    Project { id: "messaging", status: ProjectStatus::InProgress },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Phone,
    Email,
    Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactEntry {
    pub kind: ContactKind,
    pub label_key: &'static str,
    pub value_key: &'static str,
}

impl ContactEntry {
    /// Link target for an already translated value.
    pub fn href(&self, value: &str) -> String {
        match self.kind {
            ContactKind::Phone => {
                let digits = value.split_whitespace().collect::<String>();
                format!("tel:{digits}")
            }
            ContactKind::Email => format!("mailto:{}", value.trim()),
            ContactKind::Location => "#".to_string(),
        }
    }
}

pub const CONTACTS: &[ContactEntry] = &[
    ContactEntry {
        kind: ContactKind::Phone,
        label_key: "contact.phone",
        value_key: "contact.phone1",
    },
    ContactEntry {
        kind: ContactKind::Phone,
        label_key: "contact.phoneLabel2",
        value_key: "contact.phone2",
    },
    ContactEntry {
        kind: ContactKind::Email,
        label_key: "contact.emailLabel",
        value_key: "contact.email",
    },
    ContactEntry {
        kind: ContactKind::Location,
        label_key: "contact.locationLabel",
        value_key: "contact.location",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label_key: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label_key: "contact.github",
        href: GITHUB_URL,
        icon: "devicon-github-plain",
    },
    SocialLink {
        label_key: "contact.linkedin",
        href: LINKEDIN_URL,
        icon: "devicon-linkedin-plain",
    },
];

/// Headline numbers for the about section.
pub fn about_stats() -> Vec<(&'static str, String)> {
    vec![
        ("about.stats.projects", PROJECTS.len().to_string()),
        ("about.stats.certifications", format!("{}+", CERTIFICATIONS.len())),
        ("about.stats.experience", "2+".to_string()),
        ("about.stats.skills", SKILLS.len().to_string()),
    ]
}

/// Title/description key pairs for the training and experience timeline.
pub const TIMELINE: &[(&str, &str)] = &[
    ("about.education.isep", "about.education.isep_desc"),
    ("about.education.sonatel", "about.education.sonatel_desc"),
    ("about.experience.projects", "about.experience.projects_desc"),
    ("about.experience.teamwork", "about.experience.teamwork_desc"),
];

/// Section anchors in page order, with their navigation label keys.
pub const SECTIONS: &[(&str, &str)] = &[
    ("home", "nav.home"),
    ("about", "nav.about"),
    ("skills", "nav.skills"),
    ("certifications", "nav.certifications"),
    ("projects", "nav.projects"),
    ("contact", "nav.contact"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{lookup, Language};

    #[test]
    fn test_skill_groups() {
        let groups = skills_by_category();
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0].0, SkillCategory::Languages);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[2].0, SkillCategory::Concepts);
        assert_eq!(groups[2].1.len(), 4);
        let total = groups.iter().map(|(_, v)| v.len()).sum::<usize>();
        assert_eq!(total, SKILLS.len());
        assert_eq!(preview_skills().len(), SKILL_PREVIEW_LEN);
        assert_eq!(preview_skills()[0].name, "PHP");
    }

    #[test]
    fn test_contact_hrefs() {
        let phone = CONTACTS[0];
        assert_eq!(phone.href("77 706 54 68"), "tel:777065468");
        assert_eq!(CONTACTS[2].href("gorguimarena@gmail.com"), "mailto:gorguimarena@gmail.com");
        assert_eq!(CONTACTS[3].href("Dakar"), "#");
    }

    #[test]
    fn test_content_keys_translated() {
        let mut keys = Vec::<String>::new();
        for cert in CERTIFICATIONS {
            keys.extend([cert.title_key(), cert.provider_key(), cert.date_key(), cert.category_key()]);
        }
        for project in PROJECTS {
            keys.extend([project.title_key(), project.description_key(), project.tech_key()]);
            keys.push(project.status.catalog_key().to_string());
        }
        for contact in CONTACTS {
            keys.extend([contact.label_key.to_string(), contact.value_key.to_string()]);
        }
        keys.extend(SOCIAL_LINKS.iter().map(|s| s.label_key.to_string()));
        keys.extend(SkillCategory::all().iter().map(|c| c.catalog_key().to_string()));
        keys.extend(about_stats().into_iter().map(|(k, _)| k.to_string()));
        for (title, desc) in TIMELINE {
            keys.extend([title.to_string(), desc.to_string()]);
        }
        keys.extend(SECTIONS.iter().map(|(_, k)| k.to_string()));

        for lang in Language::all() {
            for key in &keys {
                assert!(lookup(lang, key).is_some(), "{key} missing in {lang}");
            }
        }
    }

    #[test]
    fn test_about_stats() {
        let stats = about_stats();
        assert_eq!(stats[0].1, "4");
        assert_eq!(stats[1].1, "11+");
        assert_eq!(stats[3].1, "12");
    }
}

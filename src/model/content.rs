//! Static portfolio content.
//!
//! Plain records with no behavior. The renderer iterates over them; nothing
//! validates URIs or mutates entries after load.

use serde::Deserialize;

/// A call-to-action button in the hero banner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionLink {
    /// Button text.
    pub label: String,
    /// Target handed to the URI opener as-is.
    pub uri: String,
}

/// One card of the skills grid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillGroup {
    /// Card title.
    pub category: String,
    /// Bulleted entries.
    pub items: Vec<String>,
}

/// One card of the contacts grid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactEntry {
    /// Short badge text, e.g. "EM".
    pub icon: String,
    /// Channel name.
    pub label: String,
    /// Human readable address.
    pub value: String,
    /// Target handed to the URI opener as-is.
    pub uri: String,
}

/// Hero banner texts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeroContent {
    pub name: String,
    pub role: String,
    pub summary: String,
}

/// Title and subtitle of a grid section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionHeading {
    pub title: String,
    pub subtitle: String,
}

/// Footer texts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterContent {
    pub copyright: String,
    pub availability: String,
}

/// Everything painted on the screen.
///
/// Missing tables in a content file fall back to the built-in portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Portfolio {
    pub hero: HeroContent,
    pub action_links: Vec<ActionLink>,
    pub skills_heading: SectionHeading,
    pub skills: Vec<SkillGroup>,
    pub contacts_heading: SectionHeading,
    pub contacts: Vec<ContactEntry>,
    pub footer: FooterContent,
}

/// Which list a clickable link comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Hero action button.
    Action,
    /// Contact card.
    Contact,
}

/// Address of one clickable link within a [`Portfolio`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkRef {
    pub kind: LinkKind,
    pub index: usize,
}

impl Portfolio {
    /// Every clickable link in screen order: action buttons, then contacts.
    pub fn links(&self) -> Vec<LinkRef> {
        let actions = (0..self.action_links.len()).map(|index| LinkRef {
            kind: LinkKind::Action,
            index,
        });
        let contacts = (0..self.contacts.len()).map(|index| LinkRef {
            kind: LinkKind::Contact,
            index,
        });
        actions.chain(contacts).collect()
    }

    /// URI behind `link`, if it still exists.
    pub fn uri(&self, link: LinkRef) -> Option<&str> {
        match link.kind {
            LinkKind::Action => self.action_links.get(link.index).map(|a| a.uri.as_str()),
            LinkKind::Contact => self.contacts.get(link.index).map(|c| c.uri.as_str()),
        }
    }

    /// Label shown for `link`, if it still exists.
    pub fn label(&self, link: LinkRef) -> Option<&str> {
        match link.kind {
            LinkKind::Action => self.action_links.get(link.index).map(|a| a.label.as_str()),
            LinkKind::Contact => self.contacts.get(link.index).map(|c| c.label.as_str()),
        }
    }
}

fn action(label: &str, uri: &str) -> ActionLink {
    ActionLink {
        label: label.to_string(),
        uri: uri.to_string(),
    }
}

fn skill(category: &str, items: &[&str]) -> SkillGroup {
    SkillGroup {
        category: category.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

fn contact(icon: &str, label: &str, value: &str, uri: &str) -> ContactEntry {
    ContactEntry {
        icon: icon.to_string(),
        label: label.to_string(),
        value: value.to_string(),
        uri: uri.to_string(),
    }
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            name: "Denys Zvieriev".to_string(),
            role: "Backend Software Engineer".to_string(),
            summary: "With 8+ years of experience building scalable cloud-based microservices. \
                      Specialized in Java, Kotlin, and Spring Boot."
                .to_string(),
        }
    }
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            copyright: "© Denys Zvieriev. All rights reserved.".to_string(),
            availability: "Available for new opportunities".to_string(),
        }
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            hero: HeroContent::default(),
            action_links: vec![
                action("Email Me", "mailto:dzdenya@gmail.com"),
                action("Call", "tel:+34661455825"),
                action("Telegram", "https://t.me/denys_zz"),
                action("WhatsApp", "https://wa.me/34661455825"),
                action("LinkedIn", "https://www.linkedin.com/in/denys-zvieriev"),
            ],
            skills_heading: SectionHeading {
                title: "Technical Expertise".to_string(),
                subtitle: "A comprehensive skill set built over 8+ years of hands-on experience"
                    .to_string(),
            },
            skills: vec![
                skill("Languages", &["Java", "Kotlin", "Python", "TypeScript"]),
                skill(
                    "Frameworks",
                    &["Spring Boot", "Hibernate", "JPA", "Microservices"],
                ),
                skill("Cloud & DevOps", &["AWS", "Docker", "Kubernetes", "CI/CD"]),
                skill("Databases", &["PostgreSQL", "MongoDB", "Redis", "MySQL"]),
            ],
            contacts_heading: SectionHeading {
                title: "Get In Touch".to_string(),
                subtitle: "I'm always open to discussing new opportunities, projects, \
                           or just a quick chat about technology."
                    .to_string(),
            },
            contacts: vec![
                contact("EM", "Email", "dzdenya@gmail.com", "mailto:dzdenya@gmail.com"),
                contact("PH", "Phone", "+34 661 455 825", "tel:+34661455825"),
                contact("TG", "Telegram", "@denys_zz", "https://t.me/denys_zz"),
                contact("WA", "WhatsApp", "+34 661 455 825", "https://wa.me/34661455825"),
                contact(
                    "IN",
                    "LinkedIn",
                    "denys-zvieriev",
                    "https://www.linkedin.com/in/denys-zvieriev",
                ),
            ],
            footer: FooterContent::default(),
        }
    }
}

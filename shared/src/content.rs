//! Static content shown by the addons, tutorials and about views.
//!
//! Records are fixtures: built once per render, never mutated, never fetched.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// An addon for the streaming client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Addon {
    /// Numeric identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// One-line summary.
    pub description: String,
    /// Paragraph shown on the addon card.
    pub full_description: String,
    /// Version label.
    pub version: String,
    /// Cover image, absolute URL.
    pub image_url: String,
    /// Configure/install page, opened in a new tab.
    pub install_url: String,
    /// Category chips.
    pub tags: Vec<String>,
}

impl Addon {
    /// Checks the outbound links of the record.
    pub fn validate(&self) -> Result<()> {
        check_https("addon.image_url", &self.image_url)?;
        check_https("addon.install_url", &self.install_url)
    }
}

/// A video/thread walkthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutorial {
    /// Numeric identifier.
    pub id: u32,
    /// Headline.
    pub title: String,
    /// Short paragraph.
    pub description: String,
    /// Publish date, `YYYY-MM-DD`.
    pub date: String,
    /// External link, opened in a new tab.
    pub tutorial_url: String,
}

impl Tutorial {
    /// Parsed publish date.
    pub fn published_on(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").map_err(|source| Error::InvalidDate {
            value: self.date.clone(),
            source,
        })
    }

    /// Checks the publish date and the outbound link.
    pub fn validate(&self) -> Result<()> {
        self.published_on()?;
        check_https("tutorial.tutorial_url", &self.tutorial_url)
    }
}

/// Social network a profile links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    /// X, formerly Twitter.
    X,
    /// Telegram channel.
    Telegram,
}

impl SocialPlatform {
    /// Accessible label for the link.
    pub fn label(self) -> &'static str {
        match self {
            SocialPlatform::X => "X",
            SocialPlatform::Telegram => "Telegram",
        }
    }
}

/// Outbound link to a social profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Which network.
    pub platform: SocialPlatform,
    /// Profile URL.
    pub url: String,
    /// Handle printed next to the icon, if any.
    pub handle: Option<String>,
}

/// An identity card on the about view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Role line under the name.
    pub role: String,
    /// Picture, relative to the static asset directory.
    pub avatar: String,
    /// Alt text for the picture.
    pub avatar_alt: String,
    /// Outbound profile links.
    pub socials: Vec<SocialLink>,
}

impl Profile {
    /// Checks every social link.
    pub fn validate(&self) -> Result<()> {
        self.socials
            .iter()
            .try_for_each(|link| check_https("profile.socials.url", &link.url))
    }
}

fn check_https(field: &'static str, raw: &str) -> Result<()> {
    let parsed = Url::parse(raw).map_err(|source| Error::InvalidUrl {
        field,
        url: raw.to_string(),
        source,
    })?;
    if parsed.scheme() != "https" {
        return Err(Error::InsecureUrl {
            field,
            url: raw.to_string(),
        });
    }
    Ok(())
}

/// The addon featured on the addons view.
pub fn featured_addon() -> Addon {
    Addon {
        id: 1,
        name: "Torrentio".to_string(),
        description: "إضافة شاملة لمشاهدة الأفلام والمسلسلات بجودة عالية".to_string(),
        full_description: "إضافة Torrentio هي واحدة من أفضل الإضافات لتطبيق Stremio، تتيح لك \
                           الوصول إلى مكتبة ضخمة من الأفلام والمسلسلات بجودات مختلفة. تدعم \
                           الترجمة العربية وتوفر روابط سريعة وموثوقة."
            .to_string(),
        version: "1.0.0".to_string(),
        image_url: "https://torrentio.org/wp-content/uploads/2024/12/Torrentio.png".to_string(),
        install_url: "https://torrentio.strem.fun/configure".to_string(),
        tags: vec!["أفلام".to_string(), "مسلسلات".to_string(), "جودة عالية".to_string()],
    }
}

/// The tutorial featured on the tutorials view.
pub fn featured_tutorial() -> Tutorial {
    Tutorial {
        id: 1,
        title: "كيفية تثبيت إضافة Torrentio على Stremio".to_string(),
        description: "شرح مفصل وبسيط لتثبيت إضافة Torrentio والاستفادة من جميع ميزاتها \
                      لمشاهدة أفضل للأفلام والمسلسلات"
            .to_string(),
        date: "2025-12-14".to_string(),
        tutorial_url: "https://x.com/stremiolabar/status/1986897162308100370?s=46".to_string(),
    }
}

/// Site identity card.
pub fn site_profile() -> Profile {
    Profile {
        name: "StremioLabAR".to_string(),
        role: "مالك الموقع".to_string(),
        avatar: "images/logoS.jpg".to_string(),
        avatar_alt: "StremioLabAR Logo".to_string(),
        socials: vec![
            SocialLink {
                platform: SocialPlatform::X,
                url: "https://x.com/stremiolabar".to_string(),
                handle: None,
            },
            SocialLink {
                platform: SocialPlatform::Telegram,
                url: "https://t.me/StremioLabAR".to_string(),
                handle: None,
            },
        ],
    }
}

/// Developer identity card.
pub fn developer_profile() -> Profile {
    Profile {
        name: "YASSER ALHARBI".to_string(),
        role: "Developer".to_string(),
        avatar: "images/yasser.JPG".to_string(),
        avatar_alt: "Yasser Alharbi".to_string(),
        socials: vec![SocialLink {
            platform: SocialPlatform::X,
            url: "https://x.com/i0zzw".to_string(),
            handle: Some("@i0zzw".to_string()),
        }],
    }
}

/// Validates every fixture and collects all problems found.
pub fn validate_fixtures() -> Vec<Error> {
    let results = [
        featured_addon().validate(),
        featured_tutorial().validate(),
        site_profile().validate(),
        developer_profile().validate(),
    ];
    results
        .into_iter()
        .filter_map(|result| result.err())
        .inspect(|err| tracing::warn!(error = %err, "invalid fixture"))
        .collect()
}

//! Printable flyer: the listing reflowed for paper
//!
//! The flyer is laid out once into tagged plain-text lines. The print
//! view styles them by tag; the printer gets the bare text.

use super::photo::{AssetResolver, PhotoEntry, FLYER_PHOTOS, LOGO, QR_CODE};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

pub const DEFAULT_FLYER_WIDTH: u16 = 78;
const MIN_FLYER_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FlyerRow {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Flyer {
    pub brokerage: &'static str,
    pub brokerage_tagline: &'static str,
    pub agent_name: &'static str,
    pub agent_role: &'static str,
    pub agent_phone: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub badges: Vec<&'static str>,
    pub photos: &'static [PhotoEntry],
    pub stats: Vec<FlyerRow>,
    pub description: Vec<&'static str>,
    pub details: Vec<FlyerRow>,
    pub disclosures: Vec<&'static str>,
    pub neighborhood: &'static str,
    pub disclaimer: Vec<&'static str>,
    pub contact: Vec<&'static str>,
}

impl Flyer {
    pub fn starkfield() -> Self {
        Self {
            brokerage: "Starkfield Realty",
            brokerage_tagline: "Premium Properties Since 1911",
            agent_name: "E. Wharton",
            agent_role: "Realist Agent",
            agent_phone: "(555) DESPAIR",
            title: "Starkfield Farmhouse Listing",
            tagline: "Where dreams freeze and duty endures",
            badges: vec!["Off Market", "Entrapment"],
            photos: &FLYER_PHOTOS,
            stats: vec![
                FlyerRow { label: "Beds", value: "2" },
                FlyerRow { label: "Bath", value: "1" },
                FlyerRow { label: "Sqft", value: "1,847" },
                FlyerRow { label: "Winters", value: "100" },
            ],
            description: vec![
                "This storied Starkfield farmhouse offers a rare opportunity for those seeking authentic New England isolation. Set against an unforgiving landscape of endless winter, the property features original hardwood floors worn smooth by decades of resigned footsteps and windows that frame nothing but white silence.",
                "The kitchen serves as the heart of domestic obligation, complete with period-appropriate tension and a history of shattered heirlooms. Notable features include inadequate heating that mirrors the warmth of human connection, a spare bedroom ideal for unwanted relatives, and stunning views of moral constraints.",
            ],
            details: vec![
                FlyerRow { label: "Year Built", value: "1911" },
                FlyerRow { label: "Heat", value: "Inadequate" },
                FlyerRow { label: "Property Type", value: "Single Family" },
                FlyerRow { label: "Heating", value: "Wood stove" },
                FlyerRow { label: "HOA", value: "Social pressure" },
            ],
            disclosures: vec![
                "Shattered pickle dish (irreparable)",
                "Foundation built on duty, not choice",
                "Downhill run ends at elm tree",
                "Prolonged exposure to silence",
                "Site of profound restraint (1911)",
            ],
            neighborhood: "Starkfield, MA - Community defined by endurance and winter. Amenities: church, sawmill, The Hill.",
            disclaimer: vec![
                "Student parody project inspired by Ethan Frome by Edith Wharton",
                "Educational use only \u{2022} No actual properties listed",
            ],
            contact: vec!["E. Wharton, Realist Agent", "StarkfieldRealty.edu"],
        }
    }

    /// Lay the flyer out at `width` columns
    pub fn layout(&self, assets: &AssetResolver, width: u16) -> Vec<FlyerLine> {
        let width = (width as usize).max(MIN_FLYER_WIDTH);
        let mut out = FlyerWriter::new(width);

        out.push(LineKind::Heading, spread(self.brokerage, self.agent_name, width));
        out.push(
            LineKind::Muted,
            spread(self.brokerage_tagline, self.agent_role, width),
        );
        out.push(
            LineKind::Muted,
            spread(&format!("[{}]", assets.photo(&LOGO)), self.agent_phone, width),
        );
        out.rule('=');
        out.blank();

        out.push(LineKind::Title, center(self.title, width));
        out.push(LineKind::Tagline, center(self.tagline, width));
        let badges = self
            .badges
            .iter()
            .map(|b| format!("[ {} ]", b))
            .collect::<Vec<_>>()
            .join("  ");
        out.push(LineKind::Badge, center(&badges, width));
        out.blank();

        out.section("Photos");
        for photo in self.photos.iter().chain(std::iter::once(&QR_CODE)) {
            out.wrapped(
                LineKind::Body,
                &format!("{} ({})", photo.alt_text, assets.photo(photo)),
                "  * ",
            );
        }
        out.blank();

        let stats = self
            .stats
            .iter()
            .map(|s| format!("{} {}", s.value, s.label))
            .collect::<Vec<_>>()
            .join("  |  ");
        out.push(LineKind::Stats, center(&stats, width));
        out.blank();

        out.section("Property Description");
        for (i, paragraph) in self.description.iter().enumerate() {
            if i > 0 {
                out.blank();
            }
            out.wrapped(LineKind::Body, paragraph, "");
        }
        out.blank();

        out.section("Property Details");
        for row in &self.details {
            out.push(
                LineKind::Body,
                spread(&format!("  {}:", row.label), row.value, width),
            );
        }
        out.blank();

        out.section("Key Disclosures");
        for item in &self.disclosures {
            out.wrapped(LineKind::Body, item, "  - ");
        }
        out.blank();

        out.section("Neighborhood");
        out.wrapped(LineKind::Muted, self.neighborhood, "");
        out.blank();

        out.rule('=');
        let rows = self.disclaimer.len().max(self.contact.len() + 1);
        for i in 0..rows {
            let left = self.disclaimer.get(i).copied().unwrap_or("");
            let right = match i {
                0 => "Contact",
                _ => self.contact.get(i - 1).copied().unwrap_or(""),
            };
            out.push(LineKind::Muted, spread(left, right, width));
        }

        out.lines
    }

    /// Plain text for the printer, one trailing newline
    pub fn to_plain_text(&self, assets: &AssetResolver, width: u16) -> String {
        let mut text = self
            .layout(assets, width)
            .into_iter()
            .map(|line| line.text.trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        text.push('\n');
        text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Title,
    Tagline,
    Badge,
    Heading,
    Stats,
    Rule,
    Body,
    Muted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlyerLine {
    pub kind: LineKind,
    pub text: String,
}

struct FlyerWriter {
    width: usize,
    lines: Vec<FlyerLine>,
}

impl FlyerWriter {
    fn new(width: usize) -> Self {
        Self {
            width,
            lines: Vec::new(),
        }
    }

    fn push(&mut self, kind: LineKind, text: String) {
        self.lines.push(FlyerLine { kind, text });
    }

    fn blank(&mut self) {
        self.push(LineKind::Body, String::new());
    }

    fn rule(&mut self, ch: char) {
        self.push(LineKind::Rule, ch.to_string().repeat(self.width));
    }

    fn section(&mut self, heading: &str) {
        self.push(LineKind::Heading, heading.to_uppercase());
        self.rule('-');
    }

    /// Word-wrap `text`; continuation lines are indented to match `prefix`
    fn wrapped(&mut self, kind: LineKind, text: &str, prefix: &str) {
        let indent = " ".repeat(prefix.width());
        let avail = self.width.saturating_sub(prefix.width()).max(1);
        for (i, line) in wrap(text, avail).into_iter().enumerate() {
            let lead = if i == 0 { prefix } else { indent.as_str() };
            self.push(kind, format!("{}{}", lead, line));
        }
    }
}

/// Greedy word wrap measured in terminal columns
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

pub fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// `left` flush left, `right` flush right; falls back to a single space gap
pub fn spread(left: &str, right: &str, width: usize) -> String {
    let gap = width.saturating_sub(left.width() + right.width()).max(1);
    format!("{}{}{}", left, " ".repeat(gap), right)
}

// src/catalog.rs
// Static display data: body areas, mock plans, education resources.

/// Accent color family used across the UI. Maps onto the `accent-*` classes in styles.css.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Primary,
    Blockchain,
    Trust,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Primary => "accent-primary",
            Accent::Blockchain => "accent-blockchain",
            Accent::Trust => "accent-trust",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyAreaIcon {
    Brain,
    Eye,
    Heart,
    Person,
    Bone,
}

impl BodyAreaIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            BodyAreaIcon::Brain => "🧠",
            BodyAreaIcon::Eye => "👁",
            BodyAreaIcon::Heart => "❤",
            BodyAreaIcon::Person => "👤",
            BodyAreaIcon::Bone => "🦴",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyArea {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: BodyAreaIcon,
    pub accent: Accent,
    // Position on the diagram, in percent of the figure box.
    pub top_pct: u8,
    pub left_pct: u8,
}

impl BodyArea {
    pub fn position_style(&self) -> String {
        format!("top:{}%;left:{}%;", self.top_pct, self.left_pct)
    }
}

pub const BODY_AREAS: &[BodyArea] = &[
    BodyArea { id: "head", name: "Head & Brain", icon: BodyAreaIcon::Brain, accent: Accent::Primary, top_pct: 10, left_pct: 50 },
    BodyArea { id: "eyes", name: "Eyes & Vision", icon: BodyAreaIcon::Eye, accent: Accent::Blockchain, top_pct: 15, left_pct: 45 },
    BodyArea { id: "heart", name: "Heart & Cardiovascular", icon: BodyAreaIcon::Heart, accent: Accent::Trust, top_pct: 30, left_pct: 50 },
    BodyArea { id: "lungs", name: "Lungs & Respiratory", icon: BodyAreaIcon::Person, accent: Accent::Primary, top_pct: 35, left_pct: 40 },
    BodyArea { id: "stomach", name: "Digestive System", icon: BodyAreaIcon::Person, accent: Accent::Blockchain, top_pct: 45, left_pct: 50 },
    BodyArea { id: "bones", name: "Bones & Joints", icon: BodyAreaIcon::Bone, accent: Accent::Trust, top_pct: 60, left_pct: 50 },
    BodyArea { id: "legs", name: "Legs & Mobility", icon: BodyAreaIcon::Person, accent: Accent::Primary, top_pct: 75, left_pct: 50 },
];

pub fn find_area(id: &str) -> Option<&'static BodyArea> {
    BODY_AREAS.iter().find(|a| a.id == id)
}

// ---------- plans ----------

#[derive(Debug, Clone, PartialEq)]
pub struct PlanRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub provider: &'static str,
    pub monthly_premium: u32,
    pub deductible: u32,
    pub coverage_pct: u8,
    pub rating: f32,
    pub features: &'static [&'static str],
    pub match_score: u8,
    pub verified: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Strong,
    Good,
    Fair,
}

impl MatchTier {
    pub fn from_score(score: u8) -> Self {
        if score >= 90 {
            MatchTier::Strong
        } else if score >= 80 {
            MatchTier::Good
        } else {
            MatchTier::Fair
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            MatchTier::Strong => Accent::Trust,
            MatchTier::Good => Accent::Blockchain,
            MatchTier::Fair => Accent::Primary,
        }
    }
}

impl PlanRecord {
    pub fn match_tier(&self) -> MatchTier {
        MatchTier::from_score(self.match_score)
    }
}

pub const PLANS: &[PlanRecord] = &[
    PlanRecord {
        id: "basic",
        name: "Essential Care",
        provider: "HealthFirst",
        monthly_premium: 89,
        deductible: 2000,
        coverage_pct: 80,
        rating: 4.2,
        features: &["Basic preventive care", "Emergency coverage", "Generic medications"],
        match_score: 75,
        verified: true,
    },
    PlanRecord {
        id: "premium",
        name: "Complete Protection",
        provider: "MediSecure",
        monthly_premium: 156,
        deductible: 1000,
        coverage_pct: 90,
        rating: 4.7,
        features: &["Comprehensive coverage", "Specialist visits", "Brand medications", "Dental included"],
        match_score: 94,
        verified: true,
    },
    PlanRecord {
        id: "family",
        name: "Family Guardian",
        provider: "CareNetwork",
        monthly_premium: 203,
        deductible: 1500,
        coverage_pct: 85,
        rating: 4.5,
        features: &["Family coverage", "Maternity care", "Mental health", "Vision included"],
        match_score: 82,
        verified: true,
    },
];

/// "$1,500" style formatting for whole-dollar amounts.
pub fn fmt_usd(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ---------- education ----------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Guide,
    Video,
    Article,
    Community,
}

impl ResourceKind {
    pub fn glyph(self) -> &'static str {
        match self {
            ResourceKind::Guide => "📖",
            ResourceKind::Video => "🎬",
            ResourceKind::Article => "📄",
            ResourceKind::Community => "👥",
        }
    }

    /// Community cards use the neutral tone.
    pub fn accent(self) -> Option<Accent> {
        match self {
            ResourceKind::Guide => Some(Accent::Primary),
            ResourceKind::Video => Some(Accent::Blockchain),
            ResourceKind::Article => Some(Accent::Trust),
            ResourceKind::Community => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Outline,
}

impl BadgeVariant {
    pub fn for_category(category: &str) -> Self {
        match category {
            "Blockchain Basics" => BadgeVariant::Default,
            "Coverage Guide" => BadgeVariant::Secondary,
            "Claims Help" => BadgeVariant::Outline,
            _ => BadgeVariant::Secondary,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge",
            BadgeVariant::Secondary => "badge secondary",
            BadgeVariant::Outline => "badge outline",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EducationResource {
    pub kind: ResourceKind,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub category: &'static str,
}

pub const RESOURCES: &[EducationResource] = &[
    EducationResource {
        kind: ResourceKind::Guide,
        title: "Understanding Blockchain Insurance",
        description: "Learn how blockchain technology ensures transparency and security in health insurance",
        duration: "5 min read",
        category: "Blockchain Basics",
    },
    EducationResource {
        kind: ResourceKind::Video,
        title: "How to Choose the Right Coverage",
        description: "Interactive tutorial on selecting insurance plans based on your anatomy selections",
        duration: "8 min watch",
        category: "Coverage Guide",
    },
    EducationResource {
        kind: ResourceKind::Article,
        title: "Claims Process Explained",
        description: "Step-by-step guide to filing and tracking claims with blockchain verification",
        duration: "3 min read",
        category: "Claims Help",
    },
    EducationResource {
        kind: ResourceKind::Community,
        title: "Community Forum",
        description: "Connect with other users and get answers to your insurance questions",
        duration: "Join now",
        category: "Community",
    },
];

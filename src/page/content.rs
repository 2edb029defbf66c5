//! Copy shown on the page.

pub const TITLE: &str = "VenturEd";
pub const TAGLINE: &str = "Talent is evenly distributed, but opportunity is not";

pub const APPLY_LABEL: &str = "Become a Fellow";
pub const PARTNER_LABEL: &str = "Become a Partner";
pub const CONTACT_LABEL: &str = "Contact Us";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: u64,
    pub suffix: &'static str,
    pub caption: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat {
        value: 80,
        suffix: "%",
        caption: "Minority representation in our fellowship program",
    },
    Stat {
        value: 2,
        suffix: "x",
        caption: "More women in tech compared to industry average",
    },
    Stat {
        value: 100,
        suffix: "%",
        caption: "Success rate in placement",
    },
];

pub const FELLOWSHIP_HEADING: &str = "About the Fellowship";
pub const FELLOWSHIP_INTRO: &str = "Our 8-week fellowship program connects high-potential high school \
students from underrepresented backgrounds with hands-on internship opportunities at leading tech \
startups. We're building pathways to careers in technology.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub detail: &'static str,
}

pub const STEPS: [Step; 3] = [
    Step {
        title: "1/ Application",
        detail: "Submit your application and showcase your potential.",
    },
    Step {
        title: "2/ Training",
        detail: "Receive mentorship and technical training",
    },
    Step {
        title: "3/ Placement",
        detail: "Get matched with top tech companies",
    },
];

pub const TEAM_HEADING: &str = "Our Team";
pub const TEAM_INTRO: &str = "Meet the passionate individuals driving our mission forward";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub position: &'static str,
}

pub const TEAM: [TeamMember; 6] = [
    TeamMember {
        name: "Jane Doe",
        position: "CEO & Founder",
    },
    TeamMember {
        name: "John Smith",
        position: "CTO",
    },
    TeamMember {
        name: "Alice Johnson",
        position: "Head of Partnerships",
    },
    TeamMember {
        name: "Bob Williams",
        position: "Lead Developer",
    },
    TeamMember {
        name: "Emma Brown",
        position: "Marketing Director",
    },
    TeamMember {
        name: "Michael Davis",
        position: "Program Manager",
    },
];

/// Marquee items for the team strip.
pub fn team_items() -> Vec<String> {
    TEAM.iter()
        .map(|member| format!("{} · {}", member.name, member.position))
        .collect()
}

pub const PARTNERS_HEADING: &str = "Our Network";
pub const PARTNERS_INTRO: &str = "Leading organizations that support our mission";
pub const PARTNER_TILES: usize = 8;

pub const FOOTER: &str = "Built by VenturEd. :)";

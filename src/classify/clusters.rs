//! Static recommendation tables.
//!
//! Quiz lookups are keyed by the unordered top-two category pair, so both
//! orderings of a profile code land on the same record without string
//! games. Any pair without a dedicated cluster falls through to General
//! Exploration; the table is total over all reachable codes.

use crate::catalog::questions::Category;
use crate::catalog::traits::Pathway;
use crate::types::outcome::Recommendation;

struct ClusterRecord {
    cluster: &'static str,
    description: &'static str,
    courses: &'static [&'static str],
    links: &'static [&'static str],
}

impl ClusterRecord {
    fn to_recommendation(&self) -> Recommendation {
        Recommendation {
            cluster: self.cluster.to_string(),
            description: self.description.to_string(),
            courses: self.courses.iter().map(|course| course.to_string()).collect(),
            links: self.links.iter().map(|link| link.to_string()).collect(),
        }
    }
}

const BIO_HEALTH: ClusterRecord = ClusterRecord {
    cluster: "BIO (Health Sciences)",
    description: "A strong analytical mind applied to living systems. You likely \
                  enjoy understanding how the human body works.",
    courses: &[
        "Food Studies 9/10",
        "Science 10",
        "Intro to Health Sciences (if available)",
    ],
    links: &["https://www.youtube.com/playlist?list=PL8dPuuaLjXtOAKed_MxxWBNaPno5h3Zs8"],
};

const BIO_ENVIRONMENTAL: ClusterRecord = ClusterRecord {
    cluster: "BIO (Environmental & Research)",
    description: "Curious about the natural world, but drawn to systems and \
                  research rather than medicine.",
    courses: &[
        "Food Studies 9/10",
        "Outdoor Education / Environmental Science",
        "Science 10",
    ],
    links: &["https://www.khanacademy.org/science/biology/ecology"],
};

const PHY_ENGINEERING: ClusterRecord = ClusterRecord {
    cluster: "PHY (Physics & Engineering)",
    description: "Driven by understanding how things work in the physical \
                  world. Math and mechanics come naturally.",
    courses: &[
        "ADST: Power Technology / Mechanics",
        "ADST: Drafting & Design",
        "Science 10",
    ],
    links: &["https://www.youtube.com/channel/UCY1kMZp36IQSyNx_9h4mpCg"],
};

const TECH_ROBOTICS: ClusterRecord = ClusterRecord {
    cluster: "TECH (Robotics & Hardware)",
    description: "Analytical thinking blended with hands-on building. You want \
                  to make machines move.",
    courses: &[
        "ADST: Electronics & Robotics",
        "ADST: Metalwork",
        "ADST: Power Technology",
    ],
    links: &["https://create.arduino.cc/projecthub"],
};

const TECH_CODING: ClusterRecord = ClusterRecord {
    cluster: "TECH (Coding & Digital)",
    description: "You enjoy solving logical puzzles and building digital \
                  systems with code.",
    courses: &[
        "Computer Programming / Coding",
        "Digital Media Development",
        "ADST: Drafting (CAD)",
    ],
    links: &["https://www.freecodecamp.org/"],
};

const BUS_LEADERSHIP: ClusterRecord = ClusterRecord {
    cluster: "BUS (Business & Leadership)",
    description: "Goal-oriented, with an eye for systems involving people, \
                  strategy, and value.",
    courses: &[
        "Entrepreneurship & Marketing",
        "Leadership / Business Ed",
        "Economics",
    ],
    links: &["https://jabc.ca/"],
};

const ART_MEDIA: ClusterRecord = ClusterRecord {
    cluster: "ART (Media & Communication)",
    description: "Creativity paired with social awareness, well suited to \
                  storytelling and content creation.",
    courses: &[
        "Visual Arts (2D/3D)",
        "Drama / Theatre",
        "Media Arts / Graphic Design",
    ],
    links: &["https://www.canva.com/designschool/"],
};

const ART_DESIGN: ClusterRecord = ClusterRecord {
    cluster: "ART (Architecture & Design)",
    description: "A practical creative: you want to design functional things \
                  with structure and craft.",
    courses: &["ADST: Woodwork / Carpentry", "Visual Arts", "ADST: Drafting"],
    links: &["https://www.sketchup.com/plans-and-pricing/sketchup-free"],
};

const GENERAL_EXPLORATION: ClusterRecord = ClusterRecord {
    cluster: "General Exploration",
    description: "Your interests are balanced. Try a rotation of courses to \
                  find your spark.",
    courses: &[
        "ADST Rotation (Wood/Metal/Drafting)",
        "Visual Arts",
        "Food Studies",
    ],
    links: &["https://ed.ted.com/"],
};

/// Recommendation for a quiz profile. `force_non_medical` steers the bio
/// pair away from health sciences when question 7 drew the symptom-lookup
/// answer; it only applies to that pair, never elsewhere.
pub fn quiz_record(top: Category, second: Category, force_non_medical: bool) -> Recommendation {
    use Category::{Analytical, Creative, Natural, Practical, Social};

    let pair = normalize(top, second);
    let record = match pair {
        (Analytical, Natural) => {
            if force_non_medical {
                &BIO_ENVIRONMENTAL
            } else {
                &BIO_HEALTH
            }
        }
        (Natural, Practical) => &PHY_ENGINEERING,
        (Analytical, Practical) => &TECH_ROBOTICS,
        (Analytical, Creative) => &TECH_CODING,
        (Analytical, Social) => &BUS_LEADERSHIP,
        (Creative, Social) => &ART_MEDIA,
        (Creative, Practical) => &ART_DESIGN,
        _ => &GENERAL_EXPLORATION,
    };
    record.to_recommendation()
}

fn normalize(a: Category, b: Category) -> (Category, Category) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

const STEM_TECH: ClusterRecord = ClusterRecord {
    cluster: "STEM & Tech",
    description: "You think in systems and enjoy math, code, and experiments.",
    courses: &[
        "Computer Science 11/12",
        "Physics 11",
        "ADST: Electronics & Robotics",
    ],
    links: &["https://www.freecodecamp.org/"],
};

const CREATIVE_ARTS: ClusterRecord = ClusterRecord {
    cluster: "Creative Arts",
    description: "You express ideas through making: images, sound, words, and \
                  built things.",
    courses: &["Visual Arts 11", "Music Composition 11", "Media Arts 11/12"],
    links: &["https://www.canva.com/designschool/"],
};

const TRADES_TECH: ClusterRecord = ClusterRecord {
    cluster: "Trades & Technology",
    description: "You learn with your hands and like work you can stand back \
                  and look at.",
    courses: &[
        "ADST: Carpentry & Joinery 11",
        "ADST: Metalwork 11",
        "Automotive Technology 11",
    ],
    links: &["https://www.tradestrainingbc.ca/"],
};

const HEALTH_HUMAN: ClusterRecord = ClusterRecord {
    cluster: "Health & Human Services",
    description: "You care about people and how bodies and communities stay \
                  healthy.",
    courses: &[
        "Anatomy & Physiology 12",
        "Psychology 11",
        "Food Studies 11",
    ],
    links: &["https://www.youtube.com/playlist?list=PL8dPuuaLjXtOAKed_MxxWBNaPno5h3Zs8"],
};

const BUSINESS_LEADERSHIP: ClusterRecord = ClusterRecord {
    cluster: "Business & Leadership",
    description: "You organize people and plans, and you notice value others \
                  miss.",
    courses: &[
        "Entrepreneurship 12",
        "Marketing 11",
        "Leadership 11",
    ],
    links: &["https://jabc.ca/"],
};

const ACTIVE_LIVING: ClusterRecord = ClusterRecord {
    cluster: "Active Living",
    description: "Movement is how you recharge; training and competition keep \
                  you sharp.",
    courses: &[
        "Physical Education 11",
        "Fitness & Conditioning 12",
        "Outdoor Education 11",
    ],
    links: &["https://www.participaction.com/"],
};

const EXPLORATORY: ClusterRecord = ClusterRecord {
    cluster: "Exploratory Electives",
    description: "Your sliders sat low across the board. Sample broadly and \
                  come back when something clicks.",
    courses: &[
        "ADST Rotation (Wood/Metal/Drafting)",
        "Visual Arts",
        "Food Studies",
    ],
    links: &["https://ed.ted.com/"],
};

/// Recommendation for a pathway profile.
pub fn pathway_record(pathway: Pathway) -> Recommendation {
    let record = match pathway {
        Pathway::StemTech => &STEM_TECH,
        Pathway::CreativeArts => &CREATIVE_ARTS,
        Pathway::TradesTech => &TRADES_TECH,
        Pathway::HealthHuman => &HEALTH_HUMAN,
        Pathway::BusinessLeadership => &BUSINESS_LEADERSHIP,
        Pathway::ActiveLiving => &ACTIVE_LIVING,
    };
    record.to_recommendation()
}

/// Fallback shown when the trait engagement gate fires.
pub fn exploratory_record() -> Recommendation {
    EXPLORATORY.to_recommendation()
}

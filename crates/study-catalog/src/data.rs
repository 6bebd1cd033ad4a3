/// Built-in catalog content.
///
/// Both tables are compiled in and read-only for the life of the process. Order is the
/// display order.
use crate::model::{ExternalLink, Guide, Level};

pub static GUIDES: [Guide; 8] = [
    Guide {
        grade: 9,
        subject: "Chemistry",
        level: Level::Honors,
        name: "Stoichiometry & Reactions",
        url: "/guides/stoichiometry.pdf",
    },
    Guide {
        grade: 9,
        subject: "Mathematics",
        level: Level::AdvancedPlacement,
        name: "Advanced Algebra Review",
        url: "/guides/algebra-ap.pdf",
    },
    Guide {
        grade: 10,
        subject: "Economics",
        level: Level::AdvancedPlacement,
        name: "Macroeconomics Midterm",
        url: "/guides/macro-midterm.pdf",
    },
    Guide {
        grade: 10,
        subject: "Physics",
        level: Level::Honors,
        name: "Work & Energy Guide",
        url: "/guides/physics-work.pdf",
    },
    Guide {
        grade: 9,
        subject: "Biology",
        level: Level::Standard,
        name: "Cell Structure Notes",
        url: "/guides/cells.pdf",
    },
    Guide {
        grade: 10,
        subject: "Computer Science",
        level: Level::Honors,
        name: "Java Logic & Loops",
        url: "/guides/java-loops.pdf",
    },
    Guide {
        grade: 10,
        subject: "History",
        level: Level::StandardPlus,
        name: "WWII Political Review",
        url: "/guides/ww2-history.pdf",
    },
    Guide {
        grade: 9,
        subject: "English",
        level: Level::Honors,
        name: "G9 Literature Analysis",
        url: "/guides/english-lit.pdf",
    },
];

pub static EXTERNAL_LINKS: [ExternalLink; 4] = [
    ExternalLink {
        name: "Desmos",
        description: "Advanced graphing calculator for algebra and calculus.",
        category: "Mathematics",
        url: "https://www.desmos.com/calculator",
        color: "#2d70b3",
    },
    ExternalLink {
        name: "Seterra",
        description: "Geography games to learn countries, capitals, and flags.",
        category: "Geography",
        url: "https://www.geoguessr.com/seterra/",
        color: "#ff9f43",
    },
    ExternalLink {
        name: "Khan Academy",
        description: "Comprehensive video tutorials for all subjects.",
        category: "All Subjects",
        url: "https://www.khanacademy.org",
        color: "#14bf96",
    },
    ExternalLink {
        name: "Quizlet",
        description: "Flashcards and study sets for vocabulary and memorization.",
        category: "General",
        url: "https://quizlet.com",
        color: "#4257b2",
    },
];

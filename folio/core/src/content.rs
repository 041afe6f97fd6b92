//! Portfolio Content
//!
//! Static text shown on the page. Nothing here changes at runtime.

/// Who the portfolio belongs to
#[derive(Clone, Copy, Debug)]
pub struct Profile {
    pub name: &'static str,
    /// Brand shown at the left of the navigation bar
    pub brand: &'static str,
    /// First hero line, typed out on load
    pub headline: &'static str,
    /// Second hero line, typed after the headline
    pub tagline: &'static str,
    pub intro: &'static [&'static str],
    pub location: &'static str,
    pub built_with: &'static str,
    pub copyright: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Arslan Asad",
    brand: "Arslan.dev",
    headline: "Hey, I'm Arslan Asad",
    tagline: "A Software Engineer 💻",
    intro: &[
        "A fullstack developer with solid foundations in backend and AI.",
        "Passionate for building intelligent and efficient web solutions, I thrive at the \
         intersection of backend architecture, AI integration, and user-centric design to \
         deliver seamless and functional experiences.",
    ],
    location: "Based In Pakistan",
    built_with: "Built with Rust, ratatui and crossterm.",
    copyright: "© 2024 Arslan. All rights are reserved.",
};

/// Speed of both hero typewriters
pub const HERO_TYPING_SPEED_MS: u64 = 80;

/// A navigation entry and the section it scrolls to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub key: char,
    pub target: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", key: '1', target: "home" },
    NavItem { label: "Skills", key: '2', target: "skills" },
    NavItem { label: "Projects", key: '3', target: "projects" },
    NavItem { label: "Contact", key: '4', target: "contact" },
];

/// Call-to-action buttons under the hero
pub const HERO_ACTIONS: &[NavItem] = &[
    NavItem { label: "✉ Contact Me", key: 'c', target: "contact" },
    NavItem { label: "▣ View Projects", key: 'p', target: "projects" },
];

pub const SKILLS: &[&str] = &[
    "Fullstack Web Development",
    "Database Design",
    "API Integration",
    "AI Integration",
    "DevOps",
    "CI/CD Pipeline",
];

/// A group of tools in the tools showcase
#[derive(Clone, Copy, Debug)]
pub struct ToolCategory {
    pub name: &'static str,
    pub tools: &'static [&'static str],
}

pub const TOOL_CATEGORIES: &[ToolCategory] = &[
    ToolCategory {
        name: "Languages",
        tools: &["JavaScript", "TypeScript", "Python", "C++", "Java"],
    },
    ToolCategory {
        name: "Frontend",
        tools: &["React", "Next.js", "Tailwind CSS", "shadcn/ui", "HTML5", "CSS3"],
    },
    ToolCategory {
        name: "Backend",
        tools: &[
            "Node.js",
            "Django",
            "Flask",
            "FastAPI",
            ".NET",
            "Spring Boot",
            "MongoDB",
            "MySQL",
            "PostgreSQL",
            "Oracle",
            "pandas",
            "scikit-learn",
        ],
    },
    ToolCategory {
        name: "DevOps",
        tools: &["Docker", "Kubernetes", "GitHub", "GitHub Actions", "Jenkins"],
    },
];

/// A card in the project gallery
#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub repository: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        icon: "📚",
        title: "Full Stack Online Bookstore",
        description: "A fully-featured online bookstore that allows users to browse, search, \
                      and purchase books securely. It solves the problem of building scalable \
                      e-commerce backends with integrated payments, user authentication, and \
                      notification systems, all packed in a responsive UI.",
        repository: Some("https://github.com/ArslanAsad/bookstore"),
    },
    Project {
        icon: "🧠",
        title: "Resume-Assisted Job Scraper API",
        description: "An intelligent job scraping API that extracts job listings from sites \
                      like LinkedIn and Indeed based on keywords from the user's uploaded \
                      resume. It simplifies the job search process by automatically matching \
                      jobs tailored to a candidate's profile.",
        repository: Some("https://github.com/ArslanAsad/job-matching-system"),
    },
    Project {
        icon: "🛒",
        title: "MERN Stack E-Commerce App",
        description: "A modern e-commerce platform built with the MERN stack that handles \
                      product browsing, user authentication, and checkout. Designed as a \
                      course project, it tackles real-world challenges in building performant \
                      and user-friendly shopping experiences.",
        repository: None,
    },
    Project {
        icon: "📅",
        title: "Event Management System",
        description: "A desktop application for scheduling and managing events using .NET and \
                      SQL. Developed for administrative use, it streamlines event coordination \
                      tasks such as bookings, attendees, and schedules for organizations.",
        repository: None,
    },
    Project {
        icon: "💰",
        title: "Budget & Expense Tracker",
        description: "A personal finance tool that helps users monitor their spending, \
                      categorize expenses, and visualize budget usage over time. It addresses \
                      the challenge of managing day-to-day finances with a simple and \
                      intuitive JavaFX interface.",
        repository: None,
    },
    Project {
        icon: "📊",
        title: "BPM Model Analyzer",
        description: "A Python tool that parses and analyzes business process models to \
                      identify inefficiencies and provide structural insights. It assists \
                      businesses in refining workflows and improving operational efficiency \
                      through model-driven analysis.",
        repository: None,
    },
];

/// External profile link
#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/arslan-asad-301084262/",
    },
    SocialLink {
        label: "GitHub",
        url: "https://github.com/ArslanAsad/",
    },
];

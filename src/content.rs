//! Static site content — the portfolio's hard-coded records.
//!
//! Everything here is fixed at build time and immutable at runtime: identity
//! strings, nav links, experience entries, projects, achievement tabs, skill
//! categories, and gallery descriptors. Route handlers read these tables and
//! render fragments; nothing writes them.

// ── Identity ───────────────────────────────────────────────────────

/// Name rendered by the hero typewriter, one span per character.
pub const SITE_NAME: &str = "AMAN CHAUHAN";
/// Short handle shown in the hero badge.
pub const SITE_HANDLE: &str = "PawanCoder786";
/// Two-letter brand mark in the navbar.
pub const MONOGRAM: &str = "AC";
pub const TAGLINE: &str =
    "Creating elegant user experiences with a focus on minimalism, function, and attention to detail.";

pub const CONTACT_EMAIL: &str = "aman.chauhan2022@vitstudent.ac.in";
pub const CONTACT_PHONE: &str = "+91 9837408849";
pub const CONTACT_LOCATION: &str = "VIT University, Vellore, Tamil Nadu, India";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/aman-chauhan-128552256/";
pub const GITHUB_URL: &str = "https://github.com/amanchauhan786";
pub const RESUME_URL: &str = "https://coral-camala-8.tiiny.site/";
/// External booking page; opened in a new tab by the bridge.
pub const CALENDLY_URL: &str = "https://calendly.com/amssre-16267/30min?month=2025-03";

/// Hero cross-fade carousel images, rotated every 3 seconds.
pub const PROFILE_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1498050108023-c5249f4df085?q=80&w=2584&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d?q=80&w=2712&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?q=80&w=2670&auto=format&fit=crop",
];

// ── Navigation ─────────────────────────────────────────────────────

pub struct NavLink {
    pub name: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: [NavLink; 6] = [
    NavLink { name: "Home", anchor: "#home" },
    NavLink { name: "Experience", anchor: "#experience" },
    NavLink { name: "Projects", anchor: "#projects" },
    NavLink { name: "Achievements", anchor: "#achievements" },
    NavLink { name: "Gallery", anchor: "#gallery" },
    NavLink { name: "Contact", anchor: "#contact" },
];

// ── Experience timeline ────────────────────────────────────────────

pub struct ExperienceEntry {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub logo: &'static str,
}

pub const EXPERIENCES: [ExperienceEntry; 3] = [
    ExperienceEntry {
        title: "Chief AI Officer",
        company: "Cropsky",
        period: "Aug 2024 - Present",
        description: "Developed AgriDrone, an AI-powered system optimizing broadcasting and crop health monitoring using NDVI technology. Built a mobile application for real-time farm monitoring, leveraging NDVI-based analysis to generate detailed crop health reports and dashboards, boosting productivity by 40 percent.",
        logo: "https://images.unsplash.com/photo-1534670007418-fbb7f6cf32c3?q=80&w=2476&auto=format&fit=crop",
    },
    ExperienceEntry {
        title: "Gen AI Intern",
        company: "G5InfoTech",
        period: "Apr 2024 - Oct 2024",
        description: "Engineered an AI-driven content refinement pipeline using LangChain, BeautifulSoup, Scrapy, and ProxyCurl, improving content accuracy by 30 percent. Developed an automated LinkedIn profile suggestion system, enhancing content personalization and recommendation quality.",
        logo: "https://images.unsplash.com/photo-1558655146-d09347e92766?q=80&w=2564&auto=format&fit=crop",
    },
    ExperienceEntry {
        title: "Marketing Intern",
        company: "Stockz11",
        period: "Dec 2023 - Jan 2024",
        description: "Designed AI-driven ad campaigns for Facebook and Instagram, boosting audience engagement and reach. Optimized content strategy using data insights, enhancing brand visibility and targeted marketing effectiveness.",
        logo: "https://images.unsplash.com/photo-1560179707-f14e90ef3623?q=80&w=2673&auto=format&fit=crop",
    },
];

// ── Projects ───────────────────────────────────────────────────────

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub category: &'static str,
    pub link: &'static str,
    pub github: &'static str,
}

/// Filter tabs, in display order. "All" is the default and matches everything.
pub const PROJECT_CATEGORIES: [&str; 4] = ["All", "UI/UX", "Web Design", "Mobile"];

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "Minimalist Dashboard",
        description: "A clean, intuitive dashboard interface for data visualization with a focus on user experience.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?q=80&w=2670&auto=format&fit=crop",
        category: "UI/UX",
        link: "#",
        github: "#",
    },
    Project {
        title: "E-commerce Redesign",
        description: "A complete redesign of an e-commerce platform focused on simplicity and conversion optimization.",
        image: "https://images.unsplash.com/photo-1576153192396-180ecef2a715?q=80&w=2674&auto=format&fit=crop",
        category: "Web Design",
        link: "#",
        github: "#",
    },
    Project {
        title: "Mobile Banking App",
        description: "A mobile banking application with intuitive navigation and secure transaction features.",
        image: "https://images.unsplash.com/photo-1563986768609-322da13575f3?q=80&w=2670&auto=format&fit=crop",
        category: "Mobile",
        link: "#",
        github: "#",
    },
    Project {
        title: "Smart Home Control",
        description: "An intuitive interface for managing smart home devices with voice commands and automation.",
        image: "https://images.unsplash.com/photo-1558002038-bb0837aad643?q=80&w=2670&auto=format&fit=crop",
        category: "UI/UX",
        link: "#",
        github: "#",
    },
    Project {
        title: "Travel Booking Platform",
        description: "A modern travel booking platform with personalized recommendations and streamlined booking.",
        image: "https://images.unsplash.com/photo-1499363536502-87642509e31b?q=80&w=2674&auto=format&fit=crop",
        category: "Web Design",
        link: "#",
        github: "#",
    },
    Project {
        title: "Health Tracking Wearable",
        description: "A health monitoring application for wearable devices with data visualization and insights.",
        image: "https://images.unsplash.com/photo-1605296867304-46d5465a13f1?q=80&w=2670&auto=format&fit=crop",
        category: "Mobile",
        link: "#",
        github: "#",
    },
];

// ── Achievements ───────────────────────────────────────────────────

pub struct Award {
    pub title: &'static str,
    pub org: &'static str,
    pub points: &'static [&'static str],
}

pub const AWARDS: [Award; 5] = [
    Award {
        title: "Reboot Hackathon 1st Prize",
        org: "IEEE-RAS, VIT Vellore",
        points: &[
            "Secured 1st place among 30 teams, showcasing innovative problem-solving in robotics and automation.",
            "Developed a real-time LiDAR-based tunnel inspection system.",
        ],
    },
    Award {
        title: "Roboverse Hackathon 2nd Prize",
        org: "IEEE-RAS, VIT Vellore",
        points: &[
            "Awarded 2nd place for successfully developing a functional prototype in robotics and AI.",
            "Developed an AI-based animal intrusion alert and plant health monitoring system.",
        ],
    },
    Award {
        title: "National Startup Competition Top 16 Finalist",
        org: "Central University of Rajasthan",
        points: &[
            "Recognized among India's top 16 startups, demonstrating innovation and entrepreneurial skills.",
        ],
    },
    Award {
        title: "Agrithon 1st Prize Winner",
        org: "VIT Vellore",
        points: &[
            "Secured 1st place for excellence in agricultural innovation using AI-driven solutions.",
        ],
    },
    Award {
        title: "IDE Bootcamp 2024 Selected-among Top Finalists",
        org: "NIT Karnataka",
        points: &[
            "CropSky selected for a prestigious entrepreneurial bootcamp, focusing on AgriTech innovation.",
        ],
    },
];

pub struct VolunteerRole {
    pub title: &'static str,
    pub org: &'static str,
    pub period: &'static str,
    pub points: &'static [&'static str],
}

pub const VOLUNTEER_ROLES: [VolunteerRole; 2] = [
    VolunteerRole {
        title: "Technical Head",
        org: "Anti Drug Abuse Club VIT",
        period: "July 2024 - Present",
        points: &[
            "Engineered an interactive awareness website to amplify the club's impact.",
            "Boosted outreach with engaging digital campaigns and dynamic content.",
        ],
    },
    VolunteerRole {
        title: "Machine Learning Intern",
        org: "Suvidha Overseas(Foundation)",
        period: "June 2024 - August 2024",
        points: &[
            "Developed and optimized machine learning models using Microsoft Azure ML.",
            "Applied supervised learning techniques to improve predictive accuracy.",
            "Enhanced search engine optimization (SEO) strategies for data-driven insights.",
        ],
    },
];

pub struct Certification {
    pub title: &'static str,
    pub date: &'static str,
}

pub const CERTIFICATIONS: [Certification; 6] = [
    Certification { title: "Kharagpur Data Science Hackathon 2025", date: "Jan 2025" },
    Certification { title: "ISRO - AI/ML for Geo Data Analysis", date: "Sep 2024" },
    Certification { title: "Power BI Masterclass", date: "Sep 2024" },
    Certification { title: "Building Gen AI App Projects with Gemini Pro", date: "Sep 2024" },
    Certification { title: "Microsoft Certified: Azure AI Fundamentals", date: "July 2024" },
    Certification { title: "ISRO- Geospatial Technology for Climate Smart Agriculture", date: "Sep 2023" },
];

pub const LANGUAGES: [&str; 3] = ["Hindi (Native)", "English (Fluent)", "Japanese (Basic)"];
pub const INTERESTS: [&str; 3] = ["Playing Guitar", "Badminton", "Physical Fitness"];

// ── Skills ─────────────────────────────────────────────────────────

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: [SkillCategory; 6] = [
    SkillCategory {
        title: "Programming Languages",
        skills: &["Python", "C", "C++", "Java"],
    },
    SkillCategory {
        title: "Web Technologies",
        skills: &["React.js", "Node.js", "Flask", "Tailwind CSS", "Vite"],
    },
    SkillCategory {
        title: "Database Systems",
        skills: &["MySQL", "Firebase", "MongoDB"],
    },
    SkillCategory {
        title: "Data Science & Machine Learning",
        skills: &["Pandas", "NumPy", "Scikit-learn", "TensorFlow", "OpenCV", "LangChain"],
    },
    SkillCategory {
        title: "Cloud Technologies",
        skills: &["AWS", "Google Cloud Platform (GCP)", "Firebase"],
    },
    SkillCategory {
        title: "Research Skills",
        skills: &[
            "AI/ML Model Development",
            "Data Analysis",
            "Content Optimization",
            "Network Simulation",
            "Predictive Analytics",
            "Automation Systems",
        ],
    },
];

// ── Gallery ────────────────────────────────────────────────────────

pub struct GalleryImage {
    pub url: &'static str,
    pub alt: &'static str,
    pub category: &'static str,
}

pub const GALLERY_IMAGES: [GalleryImage; 8] = [
    GalleryImage {
        url: "https://images.unsplash.com/photo-1518770660439-4636190af475?q=80&w=5530&auto=format&fit=crop",
        alt: "FPGA Circuit Board - Hardware Research at IIT Roorkee",
        category: "Research",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1487887235947-a955ef187fcc?q=80&w=3498&auto=format&fit=crop",
        alt: "AgriTech Drone - CropSky AI-Powered Monitoring System",
        category: "Innovation",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1504307651254-35680f356dfd?q=80&w=2676&auto=format&fit=crop",
        alt: "Disaster Management - Nirakshit Fault Detection System",
        category: "AI/ML",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?q=80&w=3543&auto=format&fit=crop",
        alt: "Programming and Development Environment",
        category: "Development",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?q=80&w=2670&auto=format&fit=crop",
        alt: "AI Security System - SafeNest Geofencing Technology",
        category: "Security",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1611273426858-450d8e3c9fce?q=80&w=2670&auto=format&fit=crop",
        alt: "Air Quality Monitoring - Airly Vision Data Analysis",
        category: "Environment",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1469854523086-cc02fe5d8800?q=80&w=2621&auto=format&fit=crop",
        alt: "Travel Platform - Vihara Route Optimization",
        category: "Full-Stack",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1562774053-701939374585?q=80&w=2486&auto=format&fit=crop",
        alt: "Academic Excellence - VIT University Campus",
        category: "Education",
    },
];

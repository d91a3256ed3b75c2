use crate::typewriter::TypewriterConfig;

pub type ProjectId = u32;

#[derive(Debug, Clone)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub role: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub resume: &'static str,
    pub intro: &'static str,
    pub about: &'static str,
    pub facts: &'static [Fact],
}

#[derive(Debug, Clone)]
pub struct Fact {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone)]
pub struct Project {
    pub id: ProjectId,
    pub title: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub link: &'static str,
}

#[derive(Debug, Clone)]
pub struct Skill {
    pub name: &'static str,
    level: u8,
}

impl Skill {
    pub const fn new(name: &'static str, level: u8) -> Self {
        Self { name, level }
    }

    /// Proficiency as a percentage, capped at 100.
    pub fn level(&self) -> u8 {
        self.level.min(100)
    }

    pub fn bar_width(&self) -> String {
        format!("width: {}%", self.level())
    }
}

pub static PROFILE: Profile = Profile {
    name: "Poban Das",
    initials: "PD",
    role: "Developer",
    email: "pobandas33@gmail.com",
    github: "https://github.com/pobon98",
    linkedin: "https://www.linkedin.com/in/YOUR_LINKEDIN_PROFILE",
    resume: "/resume.pdf",
    intro: "A passionate and detail-oriented developer who loves clean code, delightful UX and continuous learning.",
    about: "I enjoy turning problems into elegant, user-friendly solutions. I focus on building reliable, maintainable software and learning new technologies every day.",
    facts: &[
        Fact {
            label: "Location",
            value: "India",
        },
        Fact {
            label: "Role",
            value: "Developer",
        },
        Fact {
            label: "Experience",
            value: "Internships & Projects",
        },
        Fact {
            label: "Education",
            value: "B.Tech",
        },
    ],
};

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Blood Donation App",
        summary: "Community-driven app to register donors & schedule drives.",
        description: "Built with React, Firebase, and Google Maps API. Includes donor profiles, location-based searches, and appointment scheduling.",
        tech: &["React", "Firebase", "Google Maps"],
        link: "#",
    },
    Project {
        id: 2,
        title: "Employee Leave Management System",
        summary: "Enterprise ASP.NET/C# system for leave workflows.",
        description: "Developed with ASP.NET, C#, and MS SQL to handle employee leave tracking, approvals, and reports.",
        tech: &["C#", "ASP.NET", "MS SQL"],
        link: "#",
    },
];

pub static SKILLS: &[Skill] = &[
    Skill::new("React", 90),
    Skill::new("C#", 80),
    Skill::new("SQL", 75),
    Skill::new("HTML/CSS", 85),
];

pub static HERO_PHRASES: &[&str] = &[
    "web apps.",
    "user-friendly tools.",
    "scalable backends.",
    "creative UIs.",
];

pub fn hero_typewriter() -> TypewriterConfig {
    TypewriterConfig::new(80, 1200)
}

pub fn find_project(id: ProjectId) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

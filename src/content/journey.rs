/// Area a timeline entry or learning step belongs to; picks its accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    Foundations,
    FullStack,
    Cloud,
    MachineLearning,
    Leadership,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub focus: Focus,
}

pub static TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        year: "2019",
        title: "Started Programming Journey",
        description: "Began learning web development fundamentals with HTML, CSS, and JavaScript. Built first portfolio website.",
        technologies: &["HTML", "CSS", "JavaScript", "Git"],
        focus: Focus::Foundations,
    },
    TimelineEntry {
        year: "2020",
        title: "Full Stack Development",
        description: "Mastered React and Node.js. Developed first full-stack application with user authentication and database integration.",
        technologies: &["React", "Node.js", "Express", "MongoDB"],
        focus: Focus::FullStack,
    },
    TimelineEntry {
        year: "2021",
        title: "Cloud & DevOps",
        description: "Dove into cloud computing and containerization. Deployed applications on AWS and implemented CI/CD pipelines.",
        technologies: &["AWS", "Docker", "Kubernetes", "Jenkins"],
        focus: Focus::Cloud,
    },
    TimelineEntry {
        year: "2022",
        title: "Machine Learning",
        description: "Explored AI and machine learning. Built recommendation systems and computer vision applications using Python.",
        technologies: &["Python", "TensorFlow", "PyTorch", "OpenCV"],
        focus: Focus::MachineLearning,
    },
    TimelineEntry {
        year: "2023",
        title: "Senior Developer",
        description: "Leading development teams and architecting scalable solutions. Mentoring junior developers and driving innovation.",
        technologies: &["Architecture", "Leadership", "Microservices", "Performance"],
        focus: Focus::Leadership,
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroup {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

/// Technical proficiency bars under the home timeline.
pub static PROFICIENCY: &[Skill] = &[
    Skill { name: "Frontend Development", level: 95 },
    Skill { name: "Backend Development", level: 90 },
    Skill { name: "DevOps & Cloud", level: 85 },
    Skill { name: "Machine Learning", level: 80 },
];

pub static SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        name: "Programming Languages",
        skills: &[
            Skill { name: "Java", level: 85 },
            Skill { name: "C++", level: 80 },
            Skill { name: "Python", level: 90 },
            Skill { name: "JavaScript", level: 75 },
            Skill { name: "SQL", level: 70 },
        ],
    },
    SkillGroup {
        name: "Technologies & Frameworks",
        skills: &[
            Skill { name: "React", level: 75 },
            Skill { name: "Node.js", level: 70 },
            Skill { name: "Spring Boot", level: 65 },
            Skill { name: "AWS", level: 60 },
            Skill { name: "Docker", level: 55 },
        ],
    },
    SkillGroup {
        name: "AI & ML",
        skills: &[
            Skill { name: "Machine Learning", level: 65 },
            Skill { name: "Computer Vision", level: 60 },
            Skill { name: "Generative AI", level: 55 },
            Skill { name: "TensorFlow", level: 50 },
            Skill { name: "OpenCV", level: 58 },
        ],
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct LearningStep {
    pub title: &'static str,
    pub detail: &'static str,
    pub focus: Focus,
}

pub static WHAT_I_DO: &[LearningStep] = &[
    LearningStep {
        title: "Software Development",
        detail: "Building robust applications using Java, C++, and Python",
        focus: Focus::Foundations,
    },
    LearningStep {
        title: "Cloud & DevOps",
        detail: "Learning AWS services and DevOps best practices",
        focus: Focus::Cloud,
    },
    LearningStep {
        title: "AI & Machine Learning",
        detail: "Exploring Generative AI, Computer Vision, and ML concepts",
        focus: Focus::MachineLearning,
    },
    LearningStep {
        title: "Full Stack Development",
        detail: "Creating end-to-end web applications and APIs",
        focus: Focus::FullStack,
    },
];

pub static LEARNING_PATH: &[LearningStep] = &[
    LearningStep {
        title: "Programming Fundamentals",
        detail: "Started with C++ and Java, building strong algorithmic thinking",
        focus: Focus::Foundations,
    },
    LearningStep {
        title: "Web Development",
        detail: "Expanded into full-stack development with modern frameworks",
        focus: Focus::FullStack,
    },
    LearningStep {
        title: "Cloud & DevOps",
        detail: "Currently learning AWS and DevOps practices",
        focus: Focus::Cloud,
    },
    LearningStep {
        title: "AI & Machine Learning",
        detail: "Exploring the future of technology with AI and ML",
        focus: Focus::MachineLearning,
    },
];

/// Current focus: (heading, goals).
pub static FOCUS_GOALS: &[(&str, &[&str])] = &[
    (
        "Immediate Goals",
        &[
            "Obtaining AWS certifications",
            "Building production-ready applications",
            "Contributing to open-source projects",
        ],
    ),
    (
        "Long-term Vision",
        &[
            "Specializing in AI/ML solutions",
            "Leading technical teams",
            "Building innovative products",
        ],
    ),
];

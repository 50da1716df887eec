use crate::ui::filter::{Choice, Filterable};

use super::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Web,
    Backend,
    Ai,
    Devops,
}

impl Choice for ProjectCategory {
    const ALL: &'static [Self] = &[
        ProjectCategory::Web,
        ProjectCategory::Backend,
        ProjectCategory::Ai,
        ProjectCategory::Devops,
    ];

    fn label(self) -> &'static str {
        match self {
            ProjectCategory::Web => "Web Development",
            ProjectCategory::Backend => "Backend Systems",
            ProjectCategory::Ai => "AI & ML",
            ProjectCategory::Devops => "DevOps",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: ProjectCategory,
    pub technologies: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub github_url: &'static str,
    pub status: Status,
    pub highlights: &'static [&'static str],
}

impl Filterable for Project {
    type Category = ProjectCategory;
    type Status = Status;

    fn category(&self) -> ProjectCategory {
        self.category
    }

    fn status(&self) -> Status {
        self.status
    }
}

impl Project {
    /// Link copied by `y`: the live demo when there is one.
    pub fn primary_url(&self) -> &'static str {
        self.live_url.unwrap_or(self.github_url)
    }
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-Learning Platform",
        description: "Full-stack web application built with React and Spring Boot. Features user authentication, course management, video streaming, and progress tracking.",
        category: ProjectCategory::Web,
        technologies: &["React", "Spring Boot", "MySQL", "JWT", "REST API"],
        live_url: Some("https://kedareswar.dev/e-learning"),
        github_url: "https://github.com/kedareswar/e-learning-platform",
        status: Status::Completed,
        highlights: &[
            "Responsive design with modern UI",
            "Secure user authentication",
            "Real-time progress tracking",
        ],
    },
    Project {
        id: 2,
        title: "Task Management API",
        description: "RESTful API built with Java Spring Boot for task and project management. Includes user roles, team collaboration, and notification system.",
        category: ProjectCategory::Backend,
        technologies: &["Java", "Spring Boot", "PostgreSQL", "Docker", "JUnit"],
        live_url: None,
        github_url: "https://github.com/kedareswar/task-management-api",
        status: Status::Completed,
        highlights: &[
            "Clean architecture pattern",
            "Comprehensive API documentation",
            "Containerized deployment",
        ],
    },
    Project {
        id: 3,
        title: "Image Classification Model",
        description: "Computer vision project using Python and TensorFlow to classify images. Includes data preprocessing, model training, and web interface for predictions.",
        category: ProjectCategory::Ai,
        technologies: &["Python", "TensorFlow", "OpenCV", "Flask", "NumPy"],
        live_url: None,
        github_url: "https://github.com/kedareswar/image-classification",
        status: Status::Completed,
        highlights: &[
            "95% accuracy on test dataset",
            "Real-time image processing",
            "Web-based prediction interface",
        ],
    },
    Project {
        id: 4,
        title: "AWS Infrastructure Automation",
        description: "Infrastructure as Code project using AWS services. Automated deployment pipeline with monitoring and scaling capabilities.",
        category: ProjectCategory::Devops,
        technologies: &["AWS", "Terraform", "Docker", "Jenkins", "CloudWatch"],
        live_url: None,
        github_url: "https://github.com/kedareswar/aws-infra-automation",
        status: Status::InProgress,
        highlights: &[
            "Auto-scaling infrastructure",
            "CI/CD pipeline setup",
            "Cost optimization strategies",
        ],
    },
    Project {
        id: 5,
        title: "ChatBot with Generative AI",
        description: "Intelligent chatbot using GPT models for natural language processing. Features context awareness and domain-specific responses.",
        category: ProjectCategory::Ai,
        technologies: &["Python", "OpenAI API", "FastAPI", "Vector DB", "LangChain"],
        live_url: None,
        github_url: "https://github.com/kedareswar/genai-chatbot",
        status: Status::InProgress,
        highlights: &[
            "Context-aware conversations",
            "Domain-specific knowledge",
            "Scalable API architecture",
        ],
    },
    Project {
        id: 6,
        title: "Microservices Architecture",
        description: "Distributed system design with multiple microservices, API gateway, and service mesh for scalable applications.",
        category: ProjectCategory::Backend,
        technologies: &["Java", "Spring Cloud", "Kubernetes", "Istio", "MongoDB"],
        live_url: None,
        github_url: "https://github.com/kedareswar/microservices-architecture",
        status: Status::Planned,
        highlights: &[
            "Service mesh implementation",
            "Distributed tracing",
            "Load balancing strategies",
        ],
    },
];

use crate::ui::filter::{Choice, Filterable};

use super::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CertCategory {
    Cloud,
    Programming,
    Ai,
    Devops,
    Database,
}

impl Choice for CertCategory {
    const ALL: &'static [Self] = &[
        CertCategory::Cloud,
        CertCategory::Programming,
        CertCategory::Ai,
        CertCategory::Devops,
        CertCategory::Database,
    ];

    fn label(self) -> &'static str {
        match self {
            CertCategory::Cloud => "Cloud Computing",
            CertCategory::Programming => "Programming",
            CertCategory::Ai => "AI & ML",
            CertCategory::Devops => "DevOps",
            CertCategory::Database => "Database",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CertLevel {
    Fundamental,
    Associate,
    Professional,
    Expert,
}

impl CertLevel {
    pub fn badge(self) -> &'static str {
        match self {
            CertLevel::Fundamental => "FUNDAMENTAL",
            CertLevel::Associate => "ASSOCIATE",
            CertLevel::Professional => "PROFESSIONAL",
            CertLevel::Expert => "EXPERT",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Certification {
    pub id: u32,
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub status: Status,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub credential_url: Option<&'static str>,
    pub level: CertLevel,
    pub category: CertCategory,
}

impl Filterable for Certification {
    type Category = CertCategory;
    type Status = Status;

    fn category(&self) -> CertCategory {
        self.category
    }

    fn status(&self) -> Status {
        self.status
    }
}

pub static CERTIFICATIONS: &[Certification] = &[
    Certification {
        id: 1,
        title: "AWS Certified Cloud Practitioner",
        issuer: "Amazon Web Services",
        date: "In Progress - Expected Dec 2024",
        status: Status::InProgress,
        description: "Foundational understanding of AWS cloud services, pricing, and best practices.",
        skills: &["AWS Core Services", "Cloud Computing", "Security", "Pricing Models"],
        credential_url: None,
        level: CertLevel::Fundamental,
        category: CertCategory::Cloud,
    },
    Certification {
        id: 2,
        title: "AWS Certified Solutions Architect Associate",
        issuer: "Amazon Web Services",
        date: "Planned - Q1 2025",
        status: Status::Planned,
        description: "Design and deploy scalable, highly available systems on AWS.",
        skills: &["System Architecture", "AWS Services", "High Availability", "Cost Optimization"],
        credential_url: None,
        level: CertLevel::Associate,
        category: CertCategory::Cloud,
    },
    Certification {
        id: 3,
        title: "Oracle Certified Associate - Java SE",
        issuer: "Oracle",
        date: "Planned - Q2 2025",
        status: Status::Planned,
        description: "Demonstrates proficiency in Java programming fundamentals and object-oriented concepts.",
        skills: &["Java Fundamentals", "OOP Concepts", "Data Types", "Control Structures"],
        credential_url: None,
        level: CertLevel::Associate,
        category: CertCategory::Programming,
    },
    Certification {
        id: 4,
        title: "TensorFlow Developer Certificate",
        issuer: "TensorFlow",
        date: "Planned - Q3 2025",
        status: Status::Planned,
        description: "Practical machine learning skills using TensorFlow for real-world applications.",
        skills: &["Neural Networks", "Computer Vision", "NLP", "TensorFlow"],
        credential_url: None,
        level: CertLevel::Professional,
        category: CertCategory::Ai,
    },
    Certification {
        id: 5,
        title: "Docker Certified Associate",
        issuer: "Docker",
        date: "Planned - Q2 2025",
        status: Status::Planned,
        description: "Container orchestration and Docker ecosystem expertise.",
        skills: &["Containerization", "Docker Compose", "Container Security", "Orchestration"],
        credential_url: None,
        level: CertLevel::Associate,
        category: CertCategory::Devops,
    },
    Certification {
        id: 6,
        title: "Microsoft Azure AI Fundamentals",
        issuer: "Microsoft",
        date: "Planned - Q4 2025",
        status: Status::Planned,
        description: "AI and machine learning concepts using Microsoft Azure services.",
        skills: &["Azure AI Services", "Cognitive Services", "ML Ops", "AI Ethics"],
        credential_url: None,
        level: CertLevel::Fundamental,
        category: CertCategory::Ai,
    },
];

/// One quarter of the certification roadmap.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadmapStep {
    pub period: &'static str,
    pub goals: &'static [&'static str],
}

pub static ROADMAP: &[RoadmapStep] = &[
    RoadmapStep {
        period: "Q4 2024",
        goals: &["AWS Certified Cloud Practitioner (In Progress)"],
    },
    RoadmapStep {
        period: "Q1 2025",
        goals: &["AWS Certified Solutions Architect Associate"],
    },
    RoadmapStep {
        period: "Q2 2025",
        goals: &["Oracle Certified Associate - Java SE", "Docker Certified Associate"],
    },
    RoadmapStep {
        period: "Q3-Q4 2025",
        goals: &["TensorFlow Developer Certificate", "Microsoft Azure AI Fundamentals"],
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub handle: &'static str,
    pub tagline: &'static str,
    pub intro: &'static [&'static str],
    pub location: &'static str,
    pub email: &'static str,
}

pub static PROFILE: Profile = Profile {
    name: "Kedareswar Tiruveedi",
    handle: "kedareswar.dev",
    tagline: "Crafting innovative digital experiences with cutting-edge technologies. Specializing in full-stack development, machine learning, and cloud infrastructure.",
    intro: &[
        "Hi! I'm Kedareswar Tiruveedi, a passionate software engineer with a strong foundation in multiple programming languages and emerging technologies. I love solving complex problems and building scalable solutions that make a difference.",
        "Currently expanding my expertise in cloud computing with AWS and exploring the fascinating world of Artificial Intelligence. I believe in continuous learning and staying updated with the latest technological advancements.",
        "When I'm not coding, I enjoy contributing to open-source projects, learning about new technologies, and sharing knowledge with the developer community.",
    ],
    location: "India",
    email: "kedareswar.tiruveedi@email.com",
};

#[derive(Debug, Clone, PartialEq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub link: Option<&'static str>,
}

pub static CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        label: "Email",
        value: "kedareswar.tiruveedi@email.com",
        link: Some("mailto:kedareswar.tiruveedi@email.com"),
    },
    ContactChannel {
        label: "Phone",
        value: "+91 XXXXX XXXXX",
        link: Some("tel:+91XXXXXXXXX"),
    },
    ContactChannel {
        label: "Location",
        value: "India",
        link: None,
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub handle: &'static str,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        url: "https://github.com/kedareswar",
        handle: "@kedareswar",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://linkedin.com/in/kedareswar-tiruveedi",
        handle: "kedareswar-tiruveedi",
    },
    SocialLink {
        label: "Discord",
        url: "https://discord.com/users/kedareswar",
        handle: "kedareswar#1234",
    },
];

pub static AVAILABILITY: &[&str] = &[
    "Open to full-time opportunities",
    "Available for freelance projects",
    "Interested in collaborative projects",
    "Happy to discuss technology and share knowledge",
];

pub static BEST_TIMES: &[(&str, &str)] = &[
    ("Monday - Friday", "9:00 AM - 6:00 PM IST"),
    ("Saturday", "10:00 AM - 2:00 PM IST"),
    ("Sunday", "By appointment"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQS: &[Faq] = &[
    Faq {
        question: "What's your preferred communication method?",
        answer: "Email is best for detailed discussions and project inquiries. For quick questions, LinkedIn or GitHub are great alternatives.",
    },
    Faq {
        question: "Are you available for remote work?",
        answer: "Yes! I'm open to remote opportunities and have experience working with distributed teams.",
    },
    Faq {
        question: "What technologies are you most interested in?",
        answer: "Currently focusing on cloud technologies (AWS), AI/ML applications, and full-stack development with Java and Python.",
    },
    Faq {
        question: "Can I reach out for advice or mentoring?",
        answer: "I'm always happy to help fellow developers and share knowledge. Feel free to reach out for technical discussions or career advice.",
    },
];

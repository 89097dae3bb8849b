//! Static copy for every page. Fixed at build time.

pub struct Profile {
    pub name: &'static str,
    pub short_name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub summary: &'static [&'static str],
    pub email: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Lohith Kumar Neerukonda",
    short_name: "LOHITH KUMAR",
    role: "Software Engineer",
    bio: "SOFTWARE ENGINEER SPECIALIZING IN BUILDING FINTECH PLATFORMS, SAAS APPLICATIONS AND AI-POWERED TOOLS. ALL ARCHITECTED WITH MICROSERVICES AND DEPLOYED ON CLOUD INFRASTRUCTURE. FAST, SCALABLE, AND READY TO SHIP. LET'S BUILD SOMETHING GREAT TOGETHER.",
    summary: &[
        "I'm a backend engineer focused on clean REST APIs, event-driven patterns, and dependable cloud deployments. Over ~4 years, I've built Spring Boot services, containerized them, and deployed on AWS ECS, prioritizing performance (async + caching), resilience (circuit breakers, retries), and observability (JMeter/Grafana).",
        "I like simple architectures teams can maintain and iterate on quickly.",
    ],
    email: "lohithkumarneerukonda@gmail.com",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionLink {
    pub id: &'static str,
    pub label: &'static str,
}

/// Sections of the one-page resume, in display order.
pub const RESUME_SECTIONS: &[SectionLink] = &[
    SectionLink { id: "home", label: "Home" },
    SectionLink { id: "summary", label: "Summary" },
    SectionLink { id: "skills", label: "Skills" },
    SectionLink { id: "work", label: "Work" },
    SectionLink { id: "experience", label: "Experience" },
    SectionLink { id: "contact", label: "Contact" },
];

pub const HERO_SECTION_ID: &str = "home";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectDate {
    On(&'static str),
    ComingSoon,
}

impl ProjectDate {
    pub fn label(self) -> &'static str {
        match self {
            Self::On(date) => date,
            Self::ComingSoon => "COMING SOON",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub date: ProjectDate,
    pub description: &'static str,
    pub image: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "VERDICT AI",
        date: ProjectDate::On("2026-02-06"),
        description: "AN INTERNAL TOOL I BUILT TO REVIEW CONTRACTS IN A STRUCTURED, TRACEABLE WAY.",
        image: Some("/projects/verdict-ai.svg"),
    },
    Project {
        name: "RECEIVLY",
        date: ProjectDate::ComingSoon,
        description: "MICRO AND SMALL BUSINESSES WASTE ADMINISTRATIVE TIME ON MANUAL INVOICING BECAUSE ENTERPRISE ERP SYSTEMS ARE COSTLY, COMPLEX, AND HARD TO ADOPT.",
        image: None,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobEnd {
    On(&'static str),
    Present,
}

impl JobEnd {
    pub fn label(self) -> &'static str {
        match self {
            Self::On(end) => end,
            Self::Present => "PRESENT",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Job {
    pub title: &'static str,
    pub employer: &'static str,
    pub start: &'static str,
    pub end: JobEnd,
    pub location: &'static str,
}

impl Job {
    pub fn period(&self) -> String {
        format!("{} – {}", self.start, self.end.label())
    }
}

pub const JOBS: &[Job] = &[
    Job {
        title: "Software Engineer",
        employer: "Independent",
        start: "2024",
        end: JobEnd::Present,
        location: "Remote",
    },
    Job {
        title: "Backend Engineer",
        employer: "Product engineering team",
        start: "2021",
        end: JobEnd::On("2024"),
        location: "Hyderabad, India",
    },
];

pub struct SkillGroup {
    pub heading: &'static str,
    pub items: &'static str,
}

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup { heading: "Languages", items: "Java, SQL" },
    SkillGroup {
        heading: "Backend & Frameworks",
        items: "Spring Boot, MVC/AOP, Scheduling, JPA",
    },
    SkillGroup {
        heading: "Cloud & DevOps",
        items: "AWS (ECS/ECR, S3, SQS/SNS, API GW, Lambda), Docker, Jenkins/Maven, Azure Key Vault",
    },
    SkillGroup {
        heading: "Messaging & Resilience",
        items: "Kafka, RabbitMQ, JMS, Hystrix, Quartz (retries)",
    },
    SkillGroup {
        heading: "Data & Migrations",
        items: "MySQL, PostgreSQL, SQL Server, Flyway",
    },
    SkillGroup {
        heading: "Testing & Observability",
        items: "JUnit/Mockito, JMeter, Grafana",
    },
];

pub struct CaseStudy {
    pub name: &'static str,
    pub tag: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
    pub stack: &'static str,
}

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        name: "AI Real-Estate Automation",
        tag: "Recent",
        summary: "Bedrock-powered tags/captions → automated property descriptions.",
        highlights: &[
            "Designed REST APIs; S3 ingest; async image pipeline (~30% faster).",
            "Docker→ECS; Flyway migrations; measured with JMeter/Grafana.",
        ],
        stack: "Java, Spring Boot, AWS S3/Bedrock, Docker, ECS, MySQL",
    },
    CaseStudy {
        name: "Device Confidence & Risk",
        tag: "Security",
        summary: "Security rules and risk scoring with resilient patterns.",
        highlights: &[
            "Drools rules hot-reloaded via scheduler; Hystrix circuit breaker.",
            "Kafka events; parallel calls + caching.",
        ],
        stack: "Java, Spring, Drools, Kafka, Docker, ECS",
    },
    CaseStudy {
        name: "Notification Service",
        tag: "Communication",
        summary: "Unified email/SMS/push with templates & retries.",
        highlights: &[
            "Twilio/SendGrid with Mustache; Quartz retry; async + caching.",
            "Auditable delivery with user preferences.",
        ],
        stack: "Java, Spring, Twilio, SendGrid, Quartz, MySQL, Docker",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
    /// Opens in a new tab.
    pub external: bool,
}

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        label: "EMAIL",
        href: "mailto:lohithkumarneerukonda@gmail.com",
        external: false,
    },
    ContactLink {
        label: "GITHUB",
        href: "https://github.com/squid-beast",
        external: true,
    },
    ContactLink {
        label: "LINKEDIN",
        href: "https://www.linkedin.com/in/lknnerukonda/",
        external: true,
    },
    ContactLink {
        label: "X",
        href: "https://x.com/startwithleo",
        external: true,
    },
    ContactLink {
        label: "RESUME",
        href: "https://drive.google.com/file/d/1YVAyZdpdG5s9Zz46DEMOCh7DR0cKJjU9/view?usp=sharing",
        external: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn resume_sections_have_unique_ids_and_start_with_hero() {
        let ids: HashSet<_> = RESUME_SECTIONS.iter().map(|section| section.id).collect();

        assert_eq!(ids.len(), RESUME_SECTIONS.len());
        assert_eq!(RESUME_SECTIONS[0].id, HERO_SECTION_ID);
    }

    #[test]
    fn sentinel_dates_render_as_labels() {
        assert_eq!(ProjectDate::ComingSoon.label(), "COMING SOON");
        assert_eq!(JOBS[0].period(), "2024 – PRESENT");
        assert_eq!(JOBS[1].period(), "2021 – 2024");
    }

    #[test]
    fn email_link_matches_profile() {
        let email = CONTACT_LINKS
            .iter()
            .find(|link| link.label == "EMAIL")
            .expect("email link present");

        assert_eq!(email.href, format!("mailto:{}", PROFILE.email));
        assert!(!email.external);
    }

    #[test]
    fn showcase_has_projects() {
        assert!(!PROJECTS.is_empty());
    }
}

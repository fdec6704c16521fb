//! The site's structured content.
//!
//! Edit these collections when the site copy changes; the chat
//! assistant picks the new values up automatically because the
//! knowledge blob is rebuilt from them on every message.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub tagline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub expertise: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Career {
    pub title: String,
    pub location: String,
    pub employment_type: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub social: Vec<(String, String)>,
}

/// Everything the knowledge assembler draws from, in section order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteData {
    pub company_name: String,
    pub mission: String,
    pub about: About,
    pub team: Vec<TeamMember>,
    pub services: Vec<Service>,
    pub projects: Vec<Project>,
    pub careers: Vec<Career>,
    pub contact: ContactInfo,
}

/// The canonical in-memory site content.
pub fn site_data() -> SiteData {
    SiteData {
        company_name: "Veltrix Labs".into(),
        mission: "Transform businesses through practical AI solutions that drive growth, \
                  efficiency, and better decisions."
            .into(),
        about: About {
            title: "About Us".into(),
            paragraphs: vec![
                "We build responsive, intuitive, and visually polished websites backed by \
                 solid engineering. Our work covers seamless navigation, optimized \
                 performance, and designs tailored to each brand."
                    .into(),
                "From dynamic e-commerce platforms to corporate sites and creative \
                 portfolios, we combine modern web technology with applied machine \
                 learning to bring each client's vision to life."
                    .into(),
            ],
            tagline: "AI-Powered Engineering".into(),
        },
        team: vec![
            TeamMember {
                name: "Asha Raman".into(),
                role: "Founder".into(),
                expertise: "ML & Full-Stack Development".into(),
                description: "Years of experience building machine learning systems and the \
                              products around them, with a focus on shipping models that \
                              solve real problems."
                    .into(),
            },
            TeamMember {
                name: "Daniel Okoye".into(),
                role: "Co-Founder".into(),
                expertise: "Frontend Engineering".into(),
                description: "Specializes in responsive user interfaces and design systems \
                              built on modern web frameworks."
                    .into(),
            },
        ],
        services: vec![
            Service {
                title: "Web Development".into(),
                items: vec![
                    "Custom website development".into(),
                    "Full-stack web applications".into(),
                    "Portfolio, business, and e-commerce sites".into(),
                    "API design and integration".into(),
                ],
            },
            Service {
                title: "Mobile App Development".into(),
                items: vec![
                    "Cross-platform app development".into(),
                    "Backend-powered mobile apps".into(),
                    "App maintenance and updates".into(),
                ],
            },
            Service {
                title: "Chatbot & AI Integration".into(),
                items: vec![
                    "Website chatbots backed by completion APIs".into(),
                    "Customer support automation".into(),
                    "Lead generation assistants".into(),
                    "Workflow automation".into(),
                ],
            },
            Service {
                title: "Machine Learning Solutions".into(),
                items: vec![
                    "Predictive analytics and data modeling".into(),
                    "Computer vision".into(),
                    "Natural language processing".into(),
                    "Model deployment and integration".into(),
                ],
            },
            Service {
                title: "Database & Backend".into(),
                items: vec![
                    "Database design".into(),
                    "Cloud backend setup".into(),
                    "API development".into(),
                ],
            },
            Service {
                title: "Deployment & DevOps".into(),
                items: vec![
                    "Website and app deployment".into(),
                    "CI/CD pipelines".into(),
                    "Version control setup".into(),
                ],
            },
        ],
        projects: vec![
            Project {
                title: "Vision Inspection System".into(),
                category: "Computer Vision".into(),
                description: "Real-time object detection and classification for quality \
                              control lines."
                    .into(),
            },
            Project {
                title: "Support Language Engine".into(),
                category: "Natural Language".into(),
                description: "Language understanding for customer service automation.".into(),
            },
            Project {
                title: "Demand Forecaster".into(),
                category: "Data Science".into(),
                description: "ML-powered forecasting for enterprise planning.".into(),
            },
            Project {
                title: "Workflow Autopilot".into(),
                category: "Process Intelligence".into(),
                description: "Intelligent workflow automation driven by learned rules.".into(),
            },
            Project {
                title: "Anomaly Sentinel".into(),
                category: "Security AI".into(),
                description: "Real-time threat detection with streaming models.".into(),
            },
        ],
        careers: vec![
            Career {
                title: "Senior ML Engineer".into(),
                location: "Bengaluru, India".into(),
                employment_type: "Full-time".into(),
                description: "Build production ML models for client applications.".into(),
            },
            Career {
                title: "AI Research Engineer".into(),
                location: "Remote".into(),
                employment_type: "Full-time".into(),
                description: "Prototype and evaluate new model architectures.".into(),
            },
            Career {
                title: "Data Engineer".into(),
                location: "Bengaluru, India".into(),
                employment_type: "Full-time".into(),
                description: "Design and maintain scalable data infrastructure.".into(),
            },
        ],
        contact: ContactInfo {
            email: "hello@veltrixlabs.com".into(),
            phone: "+91 80 4123 9876".into(),
            address: "Bengaluru, India".into(),
            social: vec![
                ("Twitter".into(), "https://twitter.com/veltrixlabs".into()),
                ("Instagram".into(), "https://instagram.com/veltrixlabs".into()),
                (
                    "LinkedIn".into(),
                    "https://linkedin.com/company/veltrixlabs".into(),
                ),
            ],
        },
    }
}

//! Knowledge assembly — flattens the site content into the text blob
//! sent alongside every chat message.
//!
//! The renderer is pure and deterministic for fixed inputs: the only
//! thing that varies between two renders of unchanged data is the
//! embedded generation timestamp. Nothing is cached; callers rebuild
//! the blob on every send.

use crate::data::{SiteData, site_data};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Write;

/// Assemble the knowledge blob from the canonical site content,
/// stamped with the current time.
pub fn assemble_knowledge() -> String {
    render_knowledge(&site_data(), Utc::now())
}

/// Render the knowledge blob from explicit inputs.
///
/// Section order is fixed: framing, freshness stamp, company info,
/// about, contact, services, team, projects, careers, response
/// instructions. Within each section, items follow the collection's
/// insertion order.
pub fn render_knowledge(data: &SiteData, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "You are a helpful AI assistant for {}, an AI solutions company. You should \
         provide accurate information about the company based on the following details:",
        data.company_name
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "[DATA FRESHNESS: Generated at {} - This is live, current website data]",
        generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    );

    let _ = writeln!(out, "\n## COMPANY INFORMATION");
    let _ = writeln!(out, "Company Name: {}", data.company_name);
    let _ = writeln!(out, "Mission: {}", data.mission);

    let _ = writeln!(out, "\n## ABOUT US");
    let _ = writeln!(out, "{}", data.about.paragraphs.join("\n\n"));
    let _ = writeln!(out, "\nTagline: {}", data.about.tagline);

    let _ = writeln!(out, "\n## CONTACT INFORMATION");
    let _ = writeln!(out, "Email: {}", data.contact.email);
    let _ = writeln!(out, "Phone: {}", data.contact.phone);
    let _ = writeln!(out, "Address: {}", data.contact.address);
    if !data.contact.social.is_empty() {
        let _ = writeln!(out, "Social Media:");
        for (label, url) in &data.contact.social {
            let _ = writeln!(out, "- {label}: {url}");
        }
    }

    let _ = writeln!(out, "\n## SERVICES OFFERED");
    for (i, service) in data.services.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, service.title);
        for item in &service.items {
            let _ = writeln!(out, "   - {item}");
        }
    }

    let _ = writeln!(out, "\n## TEAM MEMBERS");
    for (i, member) in data.team.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, member.name);
        let _ = writeln!(out, "   - Role: {}", member.role);
        let _ = writeln!(out, "   - Expertise: {}", member.expertise);
        let _ = writeln!(out, "   - Experience: {}", member.description);
    }

    let _ = writeln!(out, "\n## FEATURED PROJECTS");
    for (i, project) in data.projects.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} ({}) - {}",
            i + 1,
            project.title,
            project.category,
            project.description
        );
    }

    let _ = writeln!(out, "\n## CAREER OPPORTUNITIES");
    if data.careers.is_empty() {
        let _ = writeln!(
            out,
            "We are not currently hiring, but we're always interested in talented \
             individuals. Please contact us at {} to express your interest.",
            data.contact.email
        );
    } else {
        let _ = writeln!(out, "We are currently hiring for the following positions:");
        for (i, job) in data.careers.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, job.title);
            let _ = writeln!(out, "   - Location: {}", job.location);
            let _ = writeln!(out, "   - Type: {}", job.employment_type);
            let _ = writeln!(out, "   - Description: {}", job.description);
        }
    }

    let _ = writeln!(out, "\n## INSTRUCTIONS FOR RESPONDING");
    let _ = writeln!(out, "\n### Priority 1: Company-Specific Questions");
    let _ = writeln!(
        out,
        "- If asked about the company, share the About Us section and the tagline"
    );
    let _ = writeln!(
        out,
        "- If asked about team members, give their names, roles, and expertise from the \
         knowledge above"
    );
    let _ = writeln!(
        out,
        "- If asked about services, explain the {} service categories offered",
        data.services.len()
    );
    let _ = writeln!(
        out,
        "- If asked about projects, describe any of the {} featured projects",
        data.projects.len()
    );
    let _ = writeln!(
        out,
        "- If asked about careers, list the {} open positions with location and type",
        data.careers.len()
    );
    let _ = writeln!(
        out,
        "- Direct job applications and business inquiries to {} or {}",
        data.contact.email, data.contact.phone
    );
    let _ = writeln!(out, "\n### Priority 2: General Questions");
    let _ = writeln!(
        out,
        "- For technology questions not specific to {}, answer from general knowledge \
         and relate back to the company's services when relevant",
        data.company_name
    );
    let _ = writeln!(out, "\n### Response Style");
    let _ = writeln!(
        out,
        "- Be friendly, professional, and concise; when unsure about company-specific \
         details, direct users to {}",
        data.contact.email
    );

    out
}

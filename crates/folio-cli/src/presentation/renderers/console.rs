//! Plain-text renderer for the scripted surfaces.
//!
//! Renders the same ViewModels the TUI draws, as line-oriented text.
//! Color is applied only when requested (the handlers gate it on the
//! stream being a terminal).

use owo_colors::OwoColorize;

use crate::presentation::view_models::{
    ContactViewModel, ExperienceRowViewModel, ProjectCardViewModel, SkillBadgeViewModel,
};
use crate::presentation::views::tui::icon_glyph;

#[derive(Debug, Clone, Copy)]
pub struct ConsoleOptions {
    pub enable_color: bool,
}

pub fn render_projects(cards: &[ProjectCardViewModel], options: ConsoleOptions) {
    for (idx, card) in cards.iter().enumerate() {
        if idx > 0 {
            println!();
        }

        let marker = if card.is_active { "\u{25b8}" } else { " " };
        let heading = format!(
            "{} {} {}  [{}]",
            marker,
            icon_glyph(&card.icon),
            card.title,
            card.category
        );
        if options.enable_color {
            println!("{}", heading.bold());
        } else {
            println!("{}", heading);
        }

        println!("    {}", card.description);

        let tags = card
            .tags
            .iter()
            .map(|tag| format!("#{}", tag))
            .collect::<Vec<_>>()
            .join(" ");
        if options.enable_color {
            println!("    {}  {}", tags.dimmed(), format!("Focus: {}", card.focus));
            println!("    {}", card.link.dimmed());
        } else {
            println!("    {}  Focus: {}", tags, card.focus);
            println!("    {}", card.link);
        }
    }
}

pub fn render_skills(badges: &[SkillBadgeViewModel], options: ConsoleOptions) {
    for badge in badges {
        let line = format!("{} {}", icon_glyph(&badge.icon), badge.name);
        if badge.is_active && options.enable_color {
            println!("{}", line.bold());
        } else {
            println!("{}", line);
        }
    }
}

pub fn render_experience(rows: &[ExperienceRowViewModel], options: ConsoleOptions) {
    for row in rows {
        let heading = format!("{} \u{2014} {}", row.role, row.org);
        if options.enable_color {
            println!("{}  {}", heading.bold(), row.period.dimmed());
        } else {
            println!("{}  {}", heading, row.period);
        }
        println!("    {}", row.description);
        if !row.is_last {
            println!();
        }
    }
}

pub fn render_contact(contact: &ContactViewModel, options: ConsoleOptions) {
    println!("{}", contact.outro);
    println!();
    for link in &contact.links {
        let line = format!("{} {}", icon_glyph(&link.icon), link.label);
        if options.enable_color {
            println!("{}  {}", line, link.href.dimmed());
        } else {
            println!("{}  {}", line, link.href);
        }
    }
    if let Some(resume) = &contact.resume {
        println!("\u{2913} Resume ({})  {}", resume.suggested_name, resume.href);
    }
    println!();
    println!("\u{201c}{}\u{201d}", contact.quote);
    println!();
    println!("{}", contact.footer);
}

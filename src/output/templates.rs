//! Visual template gallery
//!
//! The engine does not lay out pages itself; rendering is delegated to a
//! presentation layer implementing [`ResumeRenderer`]. What lives here is the
//! gallery of style descriptors a front end offers for selection.

use crate::error::Result;
use crate::processing::document::ResumeDocument;
use serde::{Deserialize, Serialize};

/// One selectable visual style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateStyle {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// The available visual styles, in gallery display order.
pub const TEMPLATE_GALLERY: [TemplateStyle; 6] = [
    TemplateStyle {
        id: "minimal",
        name: "Minimal",
        description: "Clean and straightforward design focusing on content clarity",
    },
    TemplateStyle {
        id: "professional",
        name: "Professional",
        description: "Traditional format ideal for corporate positions",
    },
    TemplateStyle {
        id: "modern",
        name: "Modern",
        description: "Contemporary design with a bold header and modern typography",
    },
    TemplateStyle {
        id: "creative",
        name: "Creative",
        description: "Unique layout for creative professionals",
    },
    TemplateStyle {
        id: "executive",
        name: "Executive",
        description: "Sophisticated design for senior positions",
    },
    TemplateStyle {
        id: "technical",
        name: "Technical",
        description: "Focused on technical skills and projects",
    },
];

/// Look up a style by its gallery id.
pub fn find_template(id: &str) -> Option<&'static TemplateStyle> {
    TEMPLATE_GALLERY.iter().find(|style| style.id == id)
}

/// Seam to the presentation collaborator: given a document and a chosen
/// style, produce a paginated artifact. Page layout is out of this crate's
/// hands by design.
pub trait ResumeRenderer {
    fn render(&self, document: &ResumeDocument, style: &TemplateStyle) -> Result<Vec<u8>>;
}

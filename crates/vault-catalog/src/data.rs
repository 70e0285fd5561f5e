//! Built-in reference data
//!
//! The 8-track / 17-domain catalog plus the shared 7-chapter placeholder
//! curriculum. Validated once on first access.

use crate::catalog::Catalog;
use crate::types::{Chapter, Domain, IconTag, Track};
use once_cell::sync::Lazy;

fn track(
    id: &str,
    title: &str,
    topics_range: &str,
    icon: &str,
    description: &str,
    estimated_chapters: u32,
) -> Track {
    Track {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        topics_range: topics_range.to_string(),
        icon: IconTag::from_tag(icon),
        estimated_chapters,
    }
}

fn domain(id: &str, track_id: &str, name: &str, description: &str) -> Domain {
    Domain {
        id: id.to_string(),
        track_id: track_id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn chapter(id: &str, title: &str, description: &str) -> Chapter {
    Chapter {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn tracks() -> Vec<Track> {
    vec![
        track(
            "t1",
            "Foundations of Regenerative Land Systems",
            "Topics 1-5",
            "Leaf",
            "Core principles of soil health, hydrology, and ecosystem restoration.",
            80,
        ),
        track(
            "t2",
            "Climate-Smart Agroforestry Deployment",
            "Topics 6-10",
            "TreeDeciduous",
            "Scalable tree-crop systems, silvopasture, and carbon farming.",
            75,
        ),
        track(
            "t3",
            "Workforce Training & Field Operations",
            "Topics 11-15",
            "Users",
            "Safety, equipment mastery, and labor management for the green economy.",
            75,
        ),
        track(
            "t4",
            "Housing, ADU, and Climate Infrastructure",
            "Topics 16-20",
            "Home",
            "Sustainable construction materials, modular design, and energy efficiency.",
            80,
        ),
        track(
            "t5",
            "Governance, Policy, and County Deployment",
            "Topics 21-24",
            "Scale",
            "Zoning, legal frameworks, and public-private partnership structures.",
            65,
        ),
        track(
            "t6",
            "Capital Formation & Institutional Finance",
            "Topics 25-28",
            "Briefcase",
            "Green bonds, carbon credits, and regenerative asset management.",
            70,
        ),
        track(
            "t7",
            "Health, Performance, and Human Systems",
            "Topics 29-33",
            "Activity",
            "Nutrition, longevity science, and community wellness integration.",
            80,
        ),
        track(
            "t8",
            "Founder, Ethics, and Generational Stewardship",
            "Topics 34-38",
            "ShieldCheck",
            "Leadership, long-term thinking, and ethical business architectures.",
            80,
        ),
    ]
}

fn domains() -> Vec<Domain> {
    vec![
        domain(
            "d1",
            "t1",
            "Soil Microbiology & Carbon Cycles",
            "Understanding the living soil web.",
        ),
        domain(
            "d2",
            "t1",
            "Watershed Management",
            "Hydrology retention and restoration strategies.",
        ),
        domain(
            "d3",
            "t1",
            "Biodiversity Baselines",
            "Measuring and enhancing ecosystem complexity.",
        ),
        domain(
            "d4",
            "t2",
            "Alley Cropping Systems",
            "Integration of tree rows with agronomic crops.",
        ),
        domain(
            "d5",
            "t2",
            "Silvopasture Integration",
            "Combining forestry and grazing of domesticated animals.",
        ),
        domain(
            "d6",
            "t3",
            "Heavy Machinery & Precision Ag",
            "Operational certification for modern equipment.",
        ),
        domain(
            "d7",
            "t3",
            "Labor Safety Standards (OSHA/Ag)",
            "Compliance and safety protocols in field ops.",
        ),
        domain(
            "d8",
            "t4",
            "Modular Construction & Prefab",
            "Rapid deployment housing technologies.",
        ),
        domain(
            "d9",
            "t4",
            "Hempcrete & Biocomposites",
            "Carbon-sequestering building materials.",
        ),
        domain(
            "d10",
            "t5",
            "Zoning Reform & Land Use",
            "Navigating and changing municipal codes.",
        ),
        domain(
            "d11",
            "t5",
            "Community Land Trusts",
            "Legal structures for shared ownership.",
        ),
        domain(
            "d12",
            "t6",
            "Carbon Credit Verification",
            "Methodologies for VCM and compliance markets.",
        ),
        domain(
            "d13",
            "t6",
            "Regenerative Economics",
            "Circular economy financial modeling.",
        ),
        domain(
            "d14",
            "t7",
            "Nutrient Density & Epigenetics",
            "Food systems impact on human gene expression.",
        ),
        domain(
            "d15",
            "t7",
            "Environmental Health",
            "Impact of built environment on physiology.",
        ),
        domain(
            "d16",
            "t8",
            "Ethical Leadership",
            "Decision making frameworks for long-term impact.",
        ),
        domain(
            "d17",
            "t8",
            "Intergenerational Wealth Transfer",
            "Stewardship trusts and succession planning.",
        ),
    ]
}

fn chapters() -> Vec<Chapter> {
    vec![
        chapter(
            "1",
            "Scope & Definitions",
            "Defining the boundaries and terminology of this domain.",
        ),
        chapter(
            "2",
            "Regulatory Landscape",
            "Current laws, gaps, and future policy directions.",
        ),
        chapter(
            "3",
            "Core Methodologies",
            "Standard operating procedures and best practices.",
        ),
        chapter(
            "4",
            "Case Studies: Success & Failure",
            "Real-world analysis of projects in this sector.",
        ),
        chapter(
            "5",
            "Technology & Tools",
            "Software and hardware stack required for implementation.",
        ),
        chapter(
            "6",
            "Financial Modeling",
            "Unit economics and ROI analysis.",
        ),
        chapter(
            "7",
            "Certification Assessment",
            "Final project and knowledge verification.",
        ),
    ]
}

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_parts(tracks(), domains(), chapters())
        .expect("built-in catalog data is consistent")
});

/// The built-in catalog
#[must_use]
pub fn builtin() -> &'static Catalog {
    &BUILTIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = builtin();
        assert_eq!(catalog.tracks().len(), 8);
        assert_eq!(catalog.chapters().len(), 7);
    }

    #[test]
    fn builtin_domains_cover_every_track() {
        let catalog = builtin();
        for track in catalog.tracks() {
            assert!(
                !catalog.domains_for(&track.id).is_empty(),
                "track {} has no domains",
                track.id
            );
        }
    }

    #[test]
    fn t1_has_three_domains() {
        assert_eq!(builtin().domains_for("t1").len(), 3);
    }

    #[test]
    fn builtin_icons_are_known() {
        for track in builtin().tracks() {
            assert!(track.icon.is_known(), "track {} icon fell back", track.id);
        }
    }
}

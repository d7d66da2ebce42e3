//! Static content catalogs: artworks and exhibitions.
//!
//! Everything here is fixed at compile time and never mutated. View state
//! refers into these slices by index.

/// One catalogued piece with descriptive metadata and an image URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Artwork {
    pub title: &'static str,
    pub year: &'static str,
    pub technique: &'static str,
    pub description: &'static str,
    pub dimensions: &'static str,
    pub image: &'static str,
}

/// Whether a show is still ahead or already closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExhibitionStatus {
    Upcoming,
    Past,
}

/// One catalogued show event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exhibition {
    pub title: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub status: ExhibitionStatus,
    pub description: &'static str,
    pub image: &'static str,
}

pub const ARTWORKS: &[Artwork] = &[
    Artwork {
        title: "Summer Dreams",
        year: "2024",
        technique: "Oil on Canvas",
        description: "A vibrant exploration of color and emotion, inspired by the warmth and energy of summer afternoons.",
        dimensions: "100x80 cm",
        image: "https://images.unsplash.com/photo-1580136579312-94651dfd596d?auto=format&fit=crop&q=80",
    },
    Artwork {
        title: "Urban Rhythms",
        year: "2023",
        technique: "Acrylic",
        description: "An abstract interpretation of city life, capturing the dynamic energy of urban spaces.",
        dimensions: "90x70 cm",
        image: "https://images.unsplash.com/photo-1578301978693-85fa9c0320b9?auto=format&fit=crop&q=80",
    },
    Artwork {
        title: "Abstract Flow",
        year: "2024",
        technique: "Mixed Media",
        description: "A fluid composition exploring the boundaries between form and chaos.",
        dimensions: "120x100 cm",
        image: "https://images.unsplash.com/photo-1576769267415-9642010aa962?auto=format&fit=crop&q=80",
    },
];

pub const EXHIBITIONS: &[Exhibition] = &[
    Exhibition {
        title: "Contemporary Visions 2024",
        date: "March 15 - April 30, 2024",
        location: "Modern Art Space, Kyiv",
        status: ExhibitionStatus::Upcoming,
        description: "A solo exhibition featuring new works exploring themes of nature and urban life.",
        image: "https://images.unsplash.com/photo-1577720580479-7d839d829c73?auto=format&fit=crop&q=80",
    },
    Exhibition {
        title: "Abstract Perspectives",
        date: "November 1 - December 15, 2023",
        location: "Gallery White Space, Kyiv",
        status: ExhibitionStatus::Past,
        description: "A group exhibition featuring contemporary abstract artists from Ukraine.",
        image: "https://images.unsplash.com/photo-1577083552431-6e5fd01988ec?auto=format&fit=crop&q=80",
    },
    Exhibition {
        title: "Summer Collection",
        date: "June 1 - July 30, 2023",
        location: "Art Hub Gallery, Lviv",
        status: ExhibitionStatus::Past,
        description: "A seasonal showcase of new works inspired by Ukrainian summers.",
        image: "https://images.unsplash.com/photo-1577083552925-2c1398fdaf86?auto=format&fit=crop&q=80",
    },
];

/// Backdrop image for the gallery page hero.
pub const GALLERY_HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1577083552431-6e5fd01988ec?auto=format&fit=crop&q=80";

/// The piece featured on the home page hero.
pub fn featured() -> &'static Artwork {
    &ARTWORKS[0]
}

/// Split a catalog into (upcoming, past), preserving catalog order on both
/// sides. Every entry lands in exactly one of the two sets.
pub fn partition_by_status(catalog: &[Exhibition]) -> (Vec<&Exhibition>, Vec<&Exhibition>) {
    catalog
        .iter()
        .partition(|ex| ex.status == ExhibitionStatus::Upcoming)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_catalog_partition() {
        let (upcoming, past) = partition_by_status(EXHIBITIONS);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].title, "Contemporary Visions 2024");
        assert_eq!(past.len(), 2);
        assert_eq!(past[0].title, "Abstract Perspectives");
        assert_eq!(past[1].title, "Summer Collection");
    }

    #[test]
    fn partition_is_exhaustive_and_disjoint() {
        let (upcoming, past) = partition_by_status(EXHIBITIONS);
        assert_eq!(upcoming.len() + past.len(), EXHIBITIONS.len());
        for ex in &upcoming {
            assert_eq!(ex.status, ExhibitionStatus::Upcoming);
            assert!(!past.contains(ex));
        }
        for ex in &past {
            assert_eq!(ex.status, ExhibitionStatus::Past);
        }
    }

    #[test]
    fn partition_handles_one_sided_catalogs() {
        let all_past: Vec<Exhibition> = EXHIBITIONS
            .iter()
            .map(|ex| Exhibition {
                status: ExhibitionStatus::Past,
                ..*ex
            })
            .collect();
        let (upcoming, past) = partition_by_status(&all_past);
        assert!(upcoming.is_empty());
        assert_eq!(past.len(), all_past.len());

        let (upcoming, past) = partition_by_status(&[]);
        assert!(upcoming.is_empty());
        assert!(past.is_empty());
    }

    #[test]
    fn featured_is_first_artwork() {
        assert_eq!(featured().title, "Summer Dreams");
        assert_eq!(featured(), &ARTWORKS[0]);
    }
}

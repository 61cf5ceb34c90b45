/// The five classification buckets every result falls into. Ids and labels
/// mirror the seeded `content_type` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    News,
    Blog,
    Shop,
    Edu,
    Other,
}

impl ContentType {
    pub fn id(self) -> i32 {
        match self {
            ContentType::News => 1,
            ContentType::Blog => 2,
            ContentType::Shop => 3,
            ContentType::Edu => 4,
            ContentType::Other => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentType::News => "News",
            ContentType::Blog => "Blog",
            ContentType::Shop => "Shop",
            ContentType::Edu => "Edu",
            ContentType::Other => "Other",
        }
    }

    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(ContentType::News),
            2 => Some(ContentType::Blog),
            3 => Some(ContentType::Shop),
            4 => Some(ContentType::Edu),
            5 => Some(ContentType::Other),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ContentType;

    #[test]
    fn ids_round_trip() {
        for category in [
            ContentType::News,
            ContentType::Blog,
            ContentType::Shop,
            ContentType::Edu,
            ContentType::Other,
        ] {
            assert_eq!(ContentType::from_id(category.id()), Some(category));
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert_eq!(ContentType::from_id(0), None);
        assert_eq!(ContentType::from_id(6), None);
    }
}

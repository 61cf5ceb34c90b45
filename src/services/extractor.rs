use thirtyfour::WebElement;

use crate::domain::{RawResultFields, ResultRecord};
use crate::error::ExtractionItemError;
use crate::services::search_session::SearchPageLocators;

/// Reads the three subfields out of one result container. Each locator is
/// tried independently; a miss becomes `None` rather than aborting the
/// other two reads.
pub async fn read_container(
    container: &WebElement,
    locators: &SearchPageLocators,
) -> RawResultFields {
    let headline = match container.find(locators.headline.clone()).await {
        Ok(element) => element.text().await.ok(),
        Err(_) => None,
    };

    let url = match container.find(locators.link.clone()).await {
        Ok(element) => element.attr("href").await.ok().flatten(),
        Err(_) => None,
    };

    let description = match container.find(locators.description.clone()).await {
        Ok(element) => element.text().await.ok(),
        Err(_) => None,
    };

    RawResultFields {
        headline,
        url,
        description,
    }
}

/// Assembles a record from the raw reads. All three locators are required;
/// a single miss discards the item so blanks are never silently persisted.
pub fn extract(raw: RawResultFields) -> Result<ResultRecord, ExtractionItemError> {
    let headline = raw
        .headline
        .ok_or(ExtractionItemError { field: "headline" })?;
    let url = raw.url.ok_or(ExtractionItemError { field: "url" })?;
    let description = raw.description.ok_or(ExtractionItemError {
        field: "description",
    })?;

    Ok(ResultRecord {
        headline,
        url,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::extract;
    use crate::domain::{RawResultFields, ResultRecord};

    fn complete() -> RawResultFields {
        RawResultFields {
            headline: Some("Rust in production".to_string()),
            url: Some("https://example.com/rust".to_string()),
            description: Some("How teams adopt the language".to_string()),
        }
    }

    #[test]
    fn complete_container_extracts() {
        let record = extract(complete()).unwrap();
        assert_eq!(
            record,
            ResultRecord {
                headline: "Rust in production".to_string(),
                url: "https://example.com/rust".to_string(),
                description: "How teams adopt the language".to_string(),
            }
        );
    }

    #[test]
    fn empty_text_is_not_a_missing_field() {
        let raw = RawResultFields {
            headline: Some("".to_string()),
            ..complete()
        };
        assert_eq!(extract(raw).unwrap().headline, "");
    }

    #[test]
    fn each_missing_field_is_named() {
        let missing_headline = RawResultFields {
            headline: None,
            ..complete()
        };
        assert_eq!(extract(missing_headline).unwrap_err().field, "headline");

        let missing_url = RawResultFields {
            url: None,
            ..complete()
        };
        assert_eq!(extract(missing_url).unwrap_err().field, "url");

        let missing_description = RawResultFields {
            description: None,
            ..complete()
        };
        assert_eq!(
            extract(missing_description).unwrap_err().field,
            "description"
        );
    }

    #[test]
    fn one_malformed_item_does_not_sink_its_batch() {
        let mut batch = vec![complete(); 5];
        batch[2].url = None;

        let extracted: Vec<_> = batch.into_iter().filter_map(|raw| extract(raw).ok()).collect();

        assert_eq!(extracted.len(), 4);
    }
}

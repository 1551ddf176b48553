//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

mod common;

#[cfg(test)]
mod passing {
    use jsonpc::{jsonpc_to_html, Document, JsonPcOptions};

    use crate::common::{parse, text_block, SAMPLE_PAGE};

    #[test]
    fn minimal_document_survives_round_trip() {
        let document = Document::from_json(
            r#"{
                "title": "T",
                "metaDescription": "D",
                "content": [
                    {
                        "type": "section",
                        "header": "H",
                        "elements": [{"type": "textBlock", "content": "line1\nline2"}]
                    }
                ]
            }"#,
        )
        .unwrap();

        let html = jsonpc_to_html(&document, &JsonPcOptions::default());
        let reparsed = parse(&html);

        assert_eq!(reparsed.title, "T");
        assert_eq!(reparsed.meta_description, "D");
        assert_eq!(reparsed.content.len(), 1);
        assert_eq!(reparsed.content[0].header, "H");
        assert_eq!(reparsed.content[0].elements, vec![text_block("line1\nline2")]);
    }

    #[test]
    fn empty_object_renders_defaults() {
        let document = Document::from_json("{}").unwrap();
        let html = jsonpc_to_html(&document, &JsonPcOptions::default());

        assert!(html.starts_with("<!DOCTYPE html>\n<html>\n<head>\n<title>Untitled</title>\n"));
        assert!(html.contains("<meta name=\"description\" content=\"\">"));
        assert!(html.ends_with("<body>\n</body>\n</html>"));
    }

    #[test]
    fn sections_may_omit_elements() {
        let document =
            Document::from_json(r#"{"content": [{"header": "Only"}, {}]}"#).unwrap();
        let html = jsonpc_to_html(&document, &JsonPcOptions::default());

        assert!(html.contains("<h2>Only</h2>\n<h2></h2>\n</body>"));
    }

    #[test]
    fn sample_page_structure_is_preserved() {
        let document = parse(SAMPLE_PAGE);
        let html = jsonpc_to_html(&document, &JsonPcOptions::default());
        let reparsed = parse(&html);

        assert_eq!(reparsed.title, document.title);
        assert_eq!(reparsed.meta_description, document.meta_description);
        assert_eq!(reparsed.content.len(), document.content.len());
        for (before, after) in document.content.iter().zip(reparsed.content.iter()) {
            assert_eq!(before.header, after.header);
            assert_eq!(before.microdata, after.microdata);
        }
        // The list keeps its title and microdata; <ol> comes back as <ul>
        assert_eq!(reparsed.content[1].elements[0], document.content[1].elements[0]);
        assert_eq!(reparsed.content[1].elements[1], document.content[1].elements[1]);
    }

    #[test]
    fn faq_survives_round_trip() {
        let document = Document::from_json(
            r#"{"content": [{"header": "FAQ", "elements": [
                {"type": "faq", "items": [{"question": "Q1", "answer": "A1"}]}
            ]}]}"#,
        )
        .unwrap();
        let reparsed = parse(&jsonpc_to_html(&document, &JsonPcOptions::default()));

        assert_eq!(reparsed.content[0].elements, document.content[0].elements);
    }

    #[test]
    fn unescaped_markup_passes_through() {
        let document = Document::from_json(
            r#"{"content": [{"header": "H", "elements": [
                {"type": "list", "items": ["<b>bold</b>"]}
            ]}]}"#,
        )
        .unwrap();
        let html = jsonpc_to_html(&document, &JsonPcOptions::default());

        assert!(html.contains("<li><b>bold</b></li>"));
    }

    #[test]
    fn escaped_markup_round_trips_as_text() {
        let document = Document::from_json(
            r#"{"content": [{"header": "1 < 2 & 3", "elements": [
                {"type": "textBlock", "content": "<script>x</script>"}
            ]}]}"#,
        )
        .unwrap();
        let options = JsonPcOptions {
            escape_html: true,
            ..Default::default()
        };
        let reparsed = parse(&jsonpc_to_html(&document, &options));

        assert_eq!(reparsed.content[0].header, "1 < 2 & 3");
        assert_eq!(reparsed.content[0].elements, vec![text_block("<script>x</script>")]);
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use jsonpc::{Document, JsonPcError};

    #[test]
    fn malformed_json_is_rejected_at_the_boundary() {
        assert!(matches!(
            Document::from_json("{\"content\": [}"),
            Err(JsonPcError::Json(_))
        ));
    }

    #[test]
    fn wrongly_typed_field_is_rejected() {
        assert!(Document::from_json(r#"{"content": "not a list"}"#).is_err());
    }
}

//! Fluent assertions over parsed documents

use crate::lyrictag::ast::{Document, Section};

/// Entry point: wrap a document for fluent structural assertions
pub fn assert_doc(document: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion {
        document,
        context: "doc".to_string(),
    }
}

pub struct DocumentAssertion<'a> {
    document: &'a Document,
    context: String,
}

impl<'a> DocumentAssertion<'a> {
    pub fn section_count(self, expected: usize) -> Self {
        let actual = self.document.section_count();
        assert_eq!(
            actual, expected,
            "{}: Expected {} sections, found {} sections",
            self.context, expected, actual
        );
        self
    }

    pub fn is_unstructured(self) -> Self {
        assert!(
            self.document.is_unstructured(),
            "{}: Expected an unstructured (zero-section) document, found {} sections",
            self.context,
            self.document.section_count()
        );
        self
    }

    pub fn section<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(SectionAssertion<'a>),
    {
        assert!(
            index < self.document.section_count(),
            "{}: Section index {} out of bounds (document has {} sections)",
            self.context,
            index,
            self.document.section_count()
        );
        assertion(SectionAssertion {
            section: &self.document.sections[index],
            context: format!("{}:sections[{}]", self.context, index),
        });
        self
    }
}

pub struct SectionAssertion<'a> {
    section: &'a Section,
    context: String,
}

impl<'a> SectionAssertion<'a> {
    pub fn section_type(self, expected: &str) -> Self {
        assert_eq!(
            self.section.section_type, expected,
            "{}: Expected section type {:?}, found {:?}",
            self.context, expected, self.section.section_type
        );
        self
    }

    pub fn style_tag_count(self, expected: usize) -> Self {
        let actual = self.section.style_tags.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} style tags, found {} style tags",
            self.context, expected, actual
        );
        self
    }

    pub fn style_tag(self, index: usize, category: &str, value: &str) -> Self {
        assert!(
            index < self.section.style_tags.len(),
            "{}: Style tag index {} out of bounds (section has {} style tags)",
            self.context,
            index,
            self.section.style_tags.len()
        );
        let tag = &self.section.style_tags[index];
        assert_eq!(
            tag.category, category,
            "{}:style_tags[{}]: Expected category {:?}, found {:?}",
            self.context, index, category, tag.category
        );
        assert_eq!(
            tag.value, value,
            "{}:style_tags[{}]: Expected value {:?}, found {:?}",
            self.context, index, value, tag.value
        );
        self
    }

    pub fn no_style_tags(self) -> Self {
        self.style_tag_count(0)
    }

    pub fn effect_tags(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.section.effect_tags, expected,
            "{}: Effect tags diverged",
            self.context
        );
        self
    }

    pub fn no_effect_tags(self) -> Self {
        self.effect_tags(&[])
    }

    pub fn lyric_lines(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.section.lyric_lines, expected,
            "{}: Lyric lines diverged",
            self.context
        );
        self
    }
}

use serde::{Deserialize, Serialize};

/// Position of a document in its corpus. Stable for the lifetime of a run.
pub type DocIndex = usize;

/// Ordered normalized tokens of one document. Duplicates are kept.
pub type Document = Vec<String>;

/// Fixed, ordered collection of tokenized documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn len(&self) -> usize { self.documents.len() }

    pub fn is_empty(&self) -> bool { self.documents.is_empty() }

    pub fn get(&self, doc: DocIndex) -> Option<&Document> { self.documents.get(doc) }

    pub fn documents(&self) -> &[Document] { &self.documents }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> { self.documents.iter() }

    pub fn into_documents(self) -> Vec<Document> { self.documents }
}

impl FromIterator<Document> for Corpus {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter { self.documents.iter() }
}

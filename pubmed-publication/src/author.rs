//! Name accessors for a single citation author

use pubmed_parser::pubmed::Author;

use crate::non_empty;

/// Borrowed view of one `<Author>` of a citation
#[derive(Debug, Clone, Copy)]
pub struct PubmedAuthor<'a> {
    author: &'a Author,
}

impl<'a> PubmedAuthor<'a> {
    pub fn new(author: &'a Author) -> Self {
        Self { author }
    }

    /// The underlying citation record
    pub fn record(&self) -> &'a Author {
        self.author
    }

    pub fn forename(&self) -> Option<&'a str> {
        non_empty(self.author.fore_name.as_deref())
    }

    pub fn surname(&self) -> Option<&'a str> {
        non_empty(self.author.last_name.as_deref())
    }

    pub fn initials(&self) -> Option<&'a str> {
        non_empty(self.author.initials.as_deref())
    }

    pub fn suffix(&self) -> Option<&'a str> {
        non_empty(self.author.suffix.as_deref())
    }

    /// Group name for consortium authors such as "COVID-19 Genomics UK Consortium"
    pub fn collective_name(&self) -> Option<&'a str> {
        non_empty(self.author.collective_name.as_deref())
    }

    /// First space-separated token of the forename
    pub fn first_name(&self) -> Option<&'a str> {
        self.first_and_middle().0
    }

    /// Second space-separated token of the forename; later tokens are dropped
    pub fn middle_name(&self) -> Option<&'a str> {
        self.first_and_middle().1
    }

    fn first_and_middle(&self) -> (Option<&'a str>, Option<&'a str>) {
        match self.forename() {
            Some(forename) => {
                let mut tokens = forename.split_whitespace();
                (tokens.next(), tokens.next())
            }
            None => (None, None),
        }
    }

    /// `Surname, Forename (Initials)`
    ///
    /// Each segment is omitted when absent, along with the separator that
    /// would join it to the previous one. An author with no personal name
    /// parts falls back to the collective name, then to an empty string.
    pub fn full_name(&self) -> String {
        let mut name = String::new();
        if let Some(surname) = self.surname() {
            name.push_str(surname);
        }
        if let Some(forename) = self.forename() {
            if !name.is_empty() {
                name.push_str(", ");
            }
            name.push_str(forename);
        }
        if let Some(initials) = self.initials() {
            if !name.is_empty() {
                name.push(' ');
            }
            name.push('(');
            name.push_str(initials);
            name.push(')');
        }

        if name.is_empty() {
            self.collective_name().unwrap_or_default().to_string()
        } else {
            name
        }
    }

    /// `Surname Initials`, the form used in author lines
    pub(crate) fn short_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.surname(), self.initials()]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            self.collective_name()
                .or_else(|| self.forename())
                .map(str::to_string)
        } else {
            Some(parts.join(" "))
        }
    }

    /// ORCID from an `<Identifier Source="ORCID">`, as written in the record
    pub fn orcid(&self) -> Option<&'a str> {
        self.author
            .identifiers
            .iter()
            .find(|id| id.source.as_deref() == Some("ORCID"))
            .and_then(|id| non_empty(Some(id.value.as_str())))
    }

    pub fn affiliations(&self) -> Vec<&'a str> {
        self.author
            .affiliation_info
            .iter()
            .filter_map(|info| non_empty(info.affiliation.as_deref()))
            .collect()
    }

    /// `false` when PubMed flags the name as not valid (`ValidYN="N"`)
    pub fn is_valid(&self) -> bool {
        self.author.valid
    }
}

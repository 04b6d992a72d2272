//! Book fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating book entity models without database insertion.

use entity::book;

/// Default test book title.
pub const DEFAULT_TITLE: &str = "The Left Hand of Darkness";

/// Default test book authors, already joined the way the catalog stores them.
pub const DEFAULT_AUTHORS: &str = "Ursula K. Le Guin";

/// Default test ISBN.
pub const DEFAULT_ISBN: &str = "9780441478125";

/// Default test cover image URL.
pub const DEFAULT_IMAGEURL: &str = "https://books.example.com/covers/left-hand.jpg";

/// Default test description.
pub const DEFAULT_DESCRIPTION: &str = "An envoy visits the planet Gethen.";

/// Default bookshelf for freshly inserted rows.
pub const DEFAULT_BOOKSHELF: &str = "";

/// Creates a book entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - title: `"The Left Hand of Darkness"`
/// - authors: `"Ursula K. Le Guin"`
/// - isbn: `"9780441478125"`
/// - imageurl: `"https://books.example.com/covers/left-hand.jpg"`
/// - description: `"An envoy visits the planet Gethen."`
/// - bookshelf: `""`
///
/// # Returns
/// - `book::Model` - In-memory book entity
pub fn entity() -> book::Model {
    book::Model {
        id: 1,
        title: DEFAULT_TITLE.to_string(),
        authors: DEFAULT_AUTHORS.to_string(),
        isbn: DEFAULT_ISBN.to_string(),
        imageurl: DEFAULT_IMAGEURL.to_string(),
        description: DEFAULT_DESCRIPTION.to_string(),
        bookshelf: DEFAULT_BOOKSHELF.to_string(),
    }
}

/// Creates a book entity builder for customization.
///
/// # Returns
/// - `BookEntityBuilder` - Builder instance with default values
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let book = fixture::book::entity_builder()
///     .title("Dune")
///     .authors("Frank Herbert")
///     .build();
/// ```
pub fn entity_builder() -> BookEntityBuilder {
    BookEntityBuilder::default()
}

/// Builder for creating customized book entity models.
pub struct BookEntityBuilder {
    id: i32,
    title: String,
    authors: String,
    isbn: String,
    imageurl: String,
    description: String,
    bookshelf: String,
}

impl Default for BookEntityBuilder {
    fn default() -> Self {
        let book = entity();

        Self {
            id: book.id,
            title: book.title,
            authors: book.authors,
            isbn: book.isbn,
            imageurl: book.imageurl,
            description: book.description,
            bookshelf: book.bookshelf,
        }
    }
}

impl BookEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn authors(mut self, authors: impl Into<String>) -> Self {
        self.authors = authors.into();
        self
    }

    pub fn isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = isbn.into();
        self
    }

    pub fn imageurl(mut self, imageurl: impl Into<String>) -> Self {
        self.imageurl = imageurl.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn bookshelf(mut self, bookshelf: impl Into<String>) -> Self {
        self.bookshelf = bookshelf.into();
        self
    }

    /// Builds and returns the book entity model.
    ///
    /// # Returns
    /// - `book::Model` - In-memory book entity with configured values
    pub fn build(self) -> book::Model {
        book::Model {
            id: self.id,
            title: self.title,
            authors: self.authors,
            isbn: self.isbn,
            imageurl: self.imageurl,
            description: self.description,
            bookshelf: self.bookshelf,
        }
    }
}

//! Test Data Factory
//!
//! Provides catalogue data for end-to-end tests:
//! - A small hand-written catalogue in the IMDB export layout
//! - Generated catalogues of any size for stress testing
//! - Malformed catalogues for loading edge cases

use std::fmt::Write;

/// Header row of the IMDB top-1000 export, reduced to the columns we read
pub const IMDB_HEADER: &str =
    "Series_Title,Released_Year,Genre,IMDB_Rating,Overview,Director,Star1,Star2,Star3,Star4";

/// A catalogue row for building CSV text
#[derive(Debug, Clone)]
pub struct MovieRow {
    /// Title
    pub title: &'static str,
    /// Raw year cell (may be non-numeric)
    pub year: &'static str,
    /// Comma-separated genres
    pub genre: &'static str,
    /// Raw rating cell (may be empty)
    pub rating: &'static str,
    /// Plot overview
    pub overview: &'static str,
    /// Director
    pub director: &'static str,
    /// Up to four cast names
    pub cast: [&'static str; 4],
}

impl MovieRow {
    /// Render as one CSV line in [`IMDB_HEADER`] order
    pub fn to_csv_line(&self) -> String {
        let cells = [
            self.title,
            self.year,
            self.genre,
            self.rating,
            self.overview,
            self.director,
            self.cast[0],
            self.cast[1],
            self.cast[2],
            self.cast[3],
        ];
        cells.iter().map(|c| quote(c)).collect::<Vec<_>>().join(",")
    }
}

/// Configuration for generated catalogues
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Number of rows
    pub count: usize,
    /// Genres cycled through the rows
    pub genres: Vec<String>,
    /// Whether every row gets a rating
    pub with_ratings: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            count: 50,
            genres: ["Action", "Comedy", "Drama", "Horror", "Sci-Fi"]
                .iter()
                .map(|g| g.to_string())
                .collect(),
            with_ratings: true,
        }
    }
}

/// Factory for catalogue fixtures
pub struct TestDataFactory;

impl TestDataFactory {
    // ========================================================================
    // SAMPLE CATALOGUE
    // ========================================================================

    /// Fourteen well-known movies. Row 12 (Apollo 13) carries the export's
    /// "PG" year cell and row 13 (Nosferatu) has no rating.
    pub fn sample_rows() -> Vec<MovieRow> {
        vec![
            MovieRow {
                title: "The Shawshank Redemption",
                year: "1994",
                genre: "Drama",
                rating: "9.3",
                overview: "Two imprisoned men bond over a number of years.",
                director: "Frank Darabont",
                cast: ["Tim Robbins", "Morgan Freeman", "Bob Gunton", "William Sadler"],
            },
            MovieRow {
                title: "The Godfather",
                year: "1972",
                genre: "Crime, Drama",
                rating: "9.2",
                overview: "An organized crime dynasty's aging patriarch transfers control to his son.",
                director: "Francis Ford Coppola",
                cast: ["Marlon Brando", "Al Pacino", "James Caan", "Diane Keaton"],
            },
            MovieRow {
                title: "The Dark Knight",
                year: "2008",
                genre: "Action, Crime, Drama",
                rating: "9.0",
                overview: "Batman faces the Joker, who wreaks havoc on Gotham.",
                director: "Christopher Nolan",
                cast: ["Christian Bale", "Heath Ledger", "Aaron Eckhart", "Michael Caine"],
            },
            MovieRow {
                title: "Inception",
                year: "2010",
                genre: "Action, Adventure, Sci-Fi",
                rating: "8.8",
                overview: "A thief who steals secrets through dream-sharing technology.",
                director: "Christopher Nolan",
                cast: ["Leonardo DiCaprio", "Joseph Gordon-Levitt", "Elliot Page", "Ken Watanabe"],
            },
            MovieRow {
                title: "Interstellar",
                year: "2014",
                genre: "Adventure, Drama, Sci-Fi",
                rating: "8.6",
                overview: "Explorers travel through a wormhole in space.",
                director: "Christopher Nolan",
                cast: ["Matthew McConaughey", "Anne Hathaway", "Jessica Chastain", "Mackenzie Foy"],
            },
            MovieRow {
                title: "Forrest Gump",
                year: "1994",
                genre: "Drama, Romance",
                rating: "8.8",
                overview: "Decades of history seen through the eyes of an Alabama man.",
                director: "Robert Zemeckis",
                cast: ["Tom Hanks", "Robin Wright", "Gary Sinise", "Sally Field"],
            },
            MovieRow {
                title: "Cast Away",
                year: "2000",
                genre: "Adventure, Drama, Romance",
                rating: "7.8",
                overview: "A FedEx employee is stranded on an uninhabited island.",
                director: "Robert Zemeckis",
                cast: ["Tom Hanks", "Helen Hunt", "Paul Sanchez", "Lari White"],
            },
            MovieRow {
                title: "Toy Story",
                year: "1995",
                genre: "Animation, Adventure, Comedy",
                rating: "8.3",
                overview: "A cowboy doll is threatened by a new spaceman action figure.",
                director: "John Lasseter",
                cast: ["Tom Hanks", "Tim Allen", "Don Rickles", "Jim Varney"],
            },
            MovieRow {
                title: "Groundhog Day",
                year: "1993",
                genre: "Comedy, Drama, Fantasy",
                rating: "8.0",
                overview: "A weatherman relives the same day again and again.",
                director: "Harold Ramis",
                cast: ["Bill Murray", "Andie MacDowell", "Chris Elliott", "Stephen Tobolowsky"],
            },
            MovieRow {
                title: "The Grand Budapest Hotel",
                year: "2014",
                genre: "Adventure, Comedy, Crime",
                rating: "8.1",
                overview: "A legendary concierge and his lobby boy at a famous hotel.",
                director: "Wes Anderson",
                cast: ["Ralph Fiennes", "F. Murray Abraham", "Mathieu Amalric", "Adrien Brody"],
            },
            MovieRow {
                title: "Superbad",
                year: "2007",
                genre: "Comedy",
                rating: "7.6",
                overview: "Two co-dependent high school seniors plan one last party.",
                director: "Greg Mottola",
                cast: ["Michael Cera", "Jonah Hill", "Christopher Mintz-Plasse", "Bill Hader"],
            },
            MovieRow {
                title: "Alien",
                year: "1979",
                genre: "Horror, Sci-Fi",
                rating: "8.4",
                overview: "A commercial spacecraft crew encounters a deadly lifeform.",
                director: "Ridley Scott",
                cast: ["Sigourney Weaver", "Tom Skerritt", "John Hurt", "Veronica Cartwright"],
            },
            MovieRow {
                title: "Apollo 13",
                year: "PG",
                genre: "Adventure, Drama, History",
                rating: "7.6",
                overview: "NASA must devise a strategy to return a crippled spacecraft.",
                director: "Ron Howard",
                cast: ["Tom Hanks", "Bill Paxton", "Kevin Bacon", "Gary Sinise"],
            },
            MovieRow {
                title: "Nosferatu",
                year: "1922",
                genre: "Fantasy, Horror",
                rating: "",
                overview: "Vampire Count Orlok expresses interest in a new residence.",
                director: "F.W. Murnau",
                cast: ["Max Schreck", "Alexander Granach", "Gustav von Wangenheim", "Greta Schroder"],
            },
        ]
    }

    /// The sample catalogue as CSV text with the IMDB header
    pub fn sample_catalogue_csv() -> String {
        Self::csv_from_rows(&Self::sample_rows())
    }

    /// CSV text for arbitrary rows
    pub fn csv_from_rows(rows: &[MovieRow]) -> String {
        let mut csv = String::from(IMDB_HEADER);
        csv.push('\n');
        for row in rows {
            csv.push_str(&row.to_csv_line());
            csv.push('\n');
        }
        csv
    }

    // ========================================================================
    // GENERATED CATALOGUES
    // ========================================================================

    /// Generated catalogue with the short column names
    pub fn generated_catalogue_csv(config: &BatchConfig) -> String {
        let mut csv = String::from("Title,Genre,Director,Star1,Released_Year,IMDB_Rating\n");
        let genres = if config.genres.is_empty() {
            vec!["Drama".to_string()]
        } else {
            config.genres.clone()
        };

        for i in 0..config.count {
            let rating = if config.with_ratings {
                format!("{:.1}", 5.0 + (i % 45) as f64 / 10.0)
            } else {
                String::new()
            };
            let _ = writeln!(
                csv,
                "Generated Movie {},{},Director {},Actor {},{},{}",
                i,
                quote(&genres[i % genres.len()]),
                i % 7,
                i % 11,
                1960 + i % 60,
                rating
            );
        }
        csv
    }

    // ========================================================================
    // MALFORMED CATALOGUES
    // ========================================================================

    /// Header without a Genre column
    pub fn missing_genre_csv() -> String {
        "Title,Director\nInception,Christopher Nolan\n".to_string()
    }

    /// Rows that end early and cells that do not parse as numbers
    pub fn ragged_csv() -> String {
        "Title,Genre,Director,Star1,Released_Year,IMDB_Rating\n\
         Heat,\"Crime, Drama\",Michael Mann,Al Pacino,1995,8.3\n\
         Ronin,Thriller\n\
         Up,\"Animation, Family\",Pete Docter,Ed Asner,2009,n/a\n"
            .to_string()
    }
}

/// Quote a CSV cell when it needs it
fn quote(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote() {
        assert_eq!(quote("Drama"), "Drama");
        assert_eq!(quote("Crime, Drama"), "\"Crime, Drama\"");
        assert_eq!(quote("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_generated_row_count() {
        let csv = TestDataFactory::generated_catalogue_csv(&BatchConfig {
            count: 12,
            ..Default::default()
        });
        assert_eq!(csv.lines().count(), 13);
    }
}

//! Built-in sample catalog.
//!
//! Fifty well-known films spanning every genre the extractor recognizes.
//! Ids are assigned in row order starting at 1.

/// (title, year, pipe-delimited genres, popularity)
pub const SAMPLE_MOVIES: [(&str, u16, &str, f32); 50] = [
    ("The Shawshank Redemption", 1994, "drama", 9.3),
    ("The Godfather", 1972, "drama|crime", 9.2),
    ("Pulp Fiction", 1994, "crime|drama", 8.9),
    ("The Dark Knight", 2008, "action|crime|drama", 9.0),
    ("Schindler's List", 1993, "biography|drama|history", 8.9),
    ("Forrest Gump", 1994, "drama|romance", 8.8),
    ("The Matrix", 1999, "action|sci-fi", 8.7),
    ("Goodfellas", 1990, "biography|crime|drama", 8.7),
    ("Inception", 2010, "action|adventure|sci-fi", 8.8),
    ("The Silence of the Lambs", 1991, "crime|drama|thriller", 8.6),
    ("Interstellar", 2014, "adventure|drama|sci-fi", 8.6),
    ("The Lord of the Rings: The Fellowship of the Ring", 2001, "adventure|drama|fantasy", 8.8),
    ("Star Wars: Episode V - The Empire Strikes Back", 1980, "action|adventure|fantasy", 8.7),
    ("The Green Mile", 1999, "crime|drama|fantasy", 8.6),
    ("The Avengers", 2012, "action|adventure|sci-fi", 8.0),
    ("Jurassic Park", 1993, "adventure|sci-fi|thriller", 8.1),
    ("Titanic", 1997, "drama|romance", 7.8),
    ("Avatar", 2009, "action|adventure|fantasy", 7.8),
    ("The Lion King", 1994, "animation|adventure|drama", 8.5),
    ("Gladiator", 2000, "action|adventure|drama", 8.5),
    ("E.T. the Extra-Terrestrial", 1982, "adventure|family|sci-fi", 7.8),
    ("Back to the Future", 1985, "adventure|comedy|sci-fi", 8.5),
    ("Raiders of the Lost Ark", 1981, "action|adventure", 8.4),
    ("The Shining", 1980, "drama|horror", 8.4),
    ("Alien", 1979, "horror|sci-fi", 8.4),
    ("Finding Nemo", 2003, "animation|adventure|comedy", 8.1),
    ("WALL-E", 2008, "animation|adventure|family", 8.4),
    ("Up", 2009, "animation|adventure|comedy", 8.2),
    ("Toy Story", 1995, "animation|adventure|comedy", 8.3),
    ("Inside Out", 2015, "animation|adventure|comedy", 8.2),
    ("The Grand Budapest Hotel", 2014, "adventure|comedy|drama", 8.1),
    ("La La Land", 2016, "comedy|drama|music", 8.0),
    ("Moonlight", 2016, "drama", 7.4),
    ("Parasite", 2019, "comedy|drama|thriller", 8.6),
    ("Get Out", 2017, "horror|mystery|thriller", 7.7),
    ("Jaws", 1975, "adventure|drama|thriller", 8.0),
    ("Halloween", 1978, "horror|thriller", 7.8),
    ("The Exorcist", 1973, "horror", 8.0),
    ("A Nightmare on Elm Street", 1984, "horror", 7.5),
    ("The Conjuring", 2013, "horror|mystery|thriller", 7.5),
    ("When Harry Met Sally", 1989, "comedy|romance", 7.6),
    ("The Notebook", 2004, "drama|romance", 7.8),
    ("Pride and Prejudice", 2005, "drama|romance", 7.8),
    ("Eternal Sunshine of the Spotless Mind", 2004, "drama|romance|sci-fi", 8.3),
    ("Casablanca", 1942, "drama|romance|war", 8.5),
    ("March of the Penguins", 2005, "documentary", 7.6),
    ("Planet Earth", 2006, "documentary", 9.4),
    ("Free Solo", 2018, "documentary|sport", 8.2),
    ("Amy", 2015, "documentary|biography|music", 7.8),
    ("Won't You Be My Neighbor?", 2018, "documentary|biography", 8.4),
];

use crate::model::{Dataset, User, UserId};
use crate::network::Network;

/// The canonical ten-user dataset: Hero through Klein, twelve friendships,
/// and a pile of data-engineering interests. Mirrors `input/social.json`.
pub fn ten_users() -> Dataset {
    let users = [
        "Hero", "Dunn", "Sue", "Chi", "Thor", "Clive", "Hicks", "Devin", "Kate", "Klein",
    ]
    .into_iter()
    .enumerate()
    .map(|(id, name)| User::new(id as UserId, name))
    .collect();

    let friendships = vec![
        (0, 1),
        (0, 2),
        (1, 2),
        (1, 3),
        (2, 3),
        (3, 4),
        (4, 5),
        (5, 6),
        (5, 7),
        (6, 8),
        (7, 8),
        (8, 9),
    ];

    let interests = [
        (0, "Hadoop"),
        (0, "Big Data"),
        (0, "HBase"),
        (0, "Java"),
        (0, "Spark"),
        (0, "Storm"),
        (0, "Cassandra"),
        (1, "NoSQL"),
        (1, "MongoDB"),
        (1, "Cassandra"),
        (1, "HBase"),
        (1, "Postgres"),
        (2, "Python"),
        (2, "scikit-learn"),
        (2, "scipy"),
        (2, "numpy"),
        (2, "statsmodels"),
        (2, "pandas"),
        (3, "R"),
        (3, "Python"),
        (3, "statistics"),
        (3, "regression"),
        (3, "probability"),
        (4, "machine learning"),
        (4, "regression"),
        (4, "decision trees"),
        (4, "libsvm"),
        (5, "Python"),
        (5, "R"),
        (5, "Java"),
        (5, "C++"),
        (5, "Haskell"),
        (5, "programming languages"),
        (6, "statistics"),
        (6, "probability"),
        (6, "mathematics"),
        (6, "theory"),
        (7, "machine learning"),
        (7, "scikit-learn"),
        (7, "Mahout"),
        (7, "neural networks"),
        (8, "neural networks"),
        (8, "deep learning"),
        (8, "Big Data"),
        (8, "artificial intelligence"),
        (9, "Hadoop"),
        (9, "Java"),
        (9, "MapReduce"),
        (9, "Big Data"),
    ]
    .into_iter()
    .map(|(id, label)| (id, label.to_string()))
    .collect();

    Dataset {
        users,
        friendships,
        interests,
    }
}

pub fn ten_user_network() -> Network {
    Network::build(ten_users()).expect("ten user fixture must validate")
}

pub mod seaorm;

pub use seaorm::SeaOrmCollectionRepository;

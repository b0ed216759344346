//! Word valences and modifier tables for [`super::VaderAnalyzer`].
//!
//! Valences are mean human ratings on a -4..=4 scale. Words listed in
//! [`BOOSTERS`] or [`NEGATIONS`] must not appear in [`VALENCES`]: the
//! analyzer relies on modifiers being absent from the lexicon.

pub(crate) const B_INCR: f64 = 0.293;
pub(crate) const B_DECR: f64 = -0.293;

pub(crate) const VALENCES: &[(&str, f64)] = &[
    ("abandon", -1.9),
    ("abandoned", -2.0),
    ("accomplish", 1.8),
    ("achieve", 1.8),
    ("achievement", 2.1),
    ("admire", 2.3),
    ("advantage", 1.0),
    ("afraid", -2.2),
    ("aggressive", -0.6),
    ("agree", 1.5),
    ("alarm", -1.4),
    ("alarming", -1.8),
    ("amazing", 2.8),
    ("anger", -2.7),
    ("angry", -2.3),
    ("anxiety", -0.7),
    ("anxious", -1.0),
    ("approve", 1.9),
    ("approved", 1.8),
    ("attack", -2.1),
    ("awesome", 3.1),
    ("awful", -2.0),
    ("bad", -2.5),
    ("bankrupt", -2.6),
    ("bankruptcy", -2.8),
    ("beat", 0.9),
    ("beautiful", 2.9),
    ("benefit", 2.0),
    ("benefits", 1.6),
    ("best", 3.2),
    ("better", 1.9),
    ("blame", -1.4),
    ("bless", 1.8),
    ("bold", 1.1),
    ("boom", 1.4),
    ("boost", 1.7),
    ("boosts", 1.3),
    ("brilliant", 2.8),
    ("broke", -1.8),
    ("broken", -2.1),
    ("bullish", 1.6),
    ("bearish", -1.5),
    ("burden", -1.9),
    ("calm", 1.3),
    ("care", 2.2),
    ("catastrophe", -3.4),
    ("celebrate", 2.7),
    ("chaos", -2.7),
    ("cheer", 2.3),
    ("cheerful", 2.5),
    ("collapse", -2.2),
    ("collapses", -2.1),
    ("confidence", 2.3),
    ("confident", 2.2),
    ("conflict", -1.3),
    ("confused", -1.3),
    ("concern", -0.4),
    ("concerns", -0.4),
    ("crash", -1.7),
    ("crashes", -1.6),
    ("crisis", -3.1),
    ("critical", -1.3),
    ("criticism", -1.9),
    ("cut", -1.1),
    ("cuts", -0.9),
    ("damage", -2.2),
    ("danger", -2.4),
    ("dangerous", -2.1),
    ("dead", -3.3),
    ("death", -2.9),
    ("decline", -1.1),
    ("declines", -1.0),
    ("defeat", -2.0),
    ("deficit", -1.7),
    ("delay", -1.3),
    ("delight", 2.9),
    ("depressed", -2.3),
    ("depression", -2.7),
    ("destroy", -2.5),
    ("devastating", -3.1),
    ("disappoint", -2.3),
    ("disappointing", -2.2),
    ("disappointment", -2.3),
    ("disaster", -3.1),
    ("doubt", -1.5),
    ("downturn", -1.5),
    ("drop", -1.1),
    ("drops", -1.0),
    ("easy", 1.9),
    ("efficient", 1.8),
    ("encourage", 2.3),
    ("encouraging", 2.4),
    ("enjoy", 2.2),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("fair", 1.3),
    ("fall", -0.9),
    ("falls", -0.8),
    ("fantastic", 2.6),
    ("fear", -2.2),
    ("fears", -1.8),
    ("fine", 0.8),
    ("fired", -2.6),
    ("fraud", -2.8),
    ("free", 2.3),
    ("fun", 2.3),
    ("gain", 2.0),
    ("gains", 1.8),
    ("glad", 2.0),
    ("gloom", -2.6),
    ("good", 1.9),
    ("great", 3.1),
    ("greed", -1.7),
    ("grow", 1.8),
    ("growing", 1.3),
    ("growth", 1.6),
    ("guilty", -1.8),
    ("happy", 2.7),
    ("harm", -2.5),
    ("hate", -2.7),
    ("healthy", 1.7),
    ("help", 1.7),
    ("hope", 1.9),
    ("hopes", 1.8),
    ("hopeful", 1.6),
    ("hurt", -2.4),
    ("ideal", 2.4),
    ("improve", 1.9),
    ("improved", 2.1),
    ("improvement", 2.0),
    ("innovative", 1.9),
    ("interest", 2.0),
    ("jeopardy", -2.1),
    ("kill", -3.7),
    ("killed", -3.5),
    ("lack", -1.3),
    ("lawsuit", -0.9),
    ("layoffs", -1.9),
    ("lead", 0.9),
    ("leading", 1.2),
    ("lose", -1.7),
    ("loses", -1.3),
    ("loss", -1.3),
    ("losses", -1.7),
    ("lost", -1.3),
    ("love", 3.2),
    ("lucky", 1.8),
    ("mess", -1.5),
    ("miss", -0.6),
    ("misses", -0.9),
    ("negative", -2.7),
    ("nervous", -1.1),
    ("nice", 1.8),
    ("optimism", 2.5),
    ("optimistic", 1.3),
    ("outperform", 1.6),
    ("pain", -2.3),
    ("panic", -2.3),
    ("peace", 2.5),
    ("perfect", 2.7),
    ("pessimism", -1.5),
    ("pessimistic", -1.5),
    ("plunge", -2.2),
    ("plunges", -2.0),
    ("poor", -2.1),
    ("popular", 1.8),
    ("positive", 2.6),
    ("pressure", -1.2),
    ("problem", -1.7),
    ("problems", -1.7),
    ("profit", 1.9),
    ("profits", 1.9),
    ("progress", 1.8),
    ("promise", 1.3),
    ("prosper", 2.2),
    ("prosperity", 2.3),
    ("protect", 1.6),
    ("rally", 1.5),
    ("rallies", 1.4),
    ("rebound", 1.2),
    ("recession", -2.2),
    ("recover", 1.6),
    ("recovery", 1.4),
    ("reject", -1.7),
    ("rejected", -1.8),
    ("relief", 2.1),
    ("resilient", 1.2),
    ("rich", 2.6),
    ("risk", -1.1),
    ("risks", -1.1),
    ("risky", -0.8),
    ("robust", 1.4),
    ("sad", -2.1),
    ("safe", 1.9),
    ("scandal", -1.9),
    ("scare", -2.2),
    ("shock", -1.6),
    ("shortage", -1.5),
    ("slump", -1.9),
    ("slumps", -1.8),
    ("smart", 1.7),
    ("soar", 2.0),
    ("soars", 1.9),
    ("solid", 1.3),
    ("stable", 1.2),
    ("steady", 0.6),
    ("strength", 2.2),
    ("strong", 2.3),
    ("struggle", -1.3),
    ("struggles", -1.4),
    ("success", 2.7),
    ("successful", 2.8),
    ("suffer", -2.1),
    ("support", 1.7),
    ("surge", 1.0),
    ("surges", 1.1),
    ("surprise", 1.1),
    ("threat", -2.4),
    ("threatens", -1.9),
    ("thrive", 2.4),
    ("thriving", 2.5),
    ("top", 0.8),
    ("tragedy", -3.4),
    ("trouble", -1.7),
    ("tumble", -1.6),
    ("tumbles", -1.5),
    ("turmoil", -2.4),
    ("uncertain", -1.2),
    ("uncertainty", -1.4),
    ("unfair", -2.1),
    ("upbeat", 1.8),
    ("upgrade", 1.4),
    ("useful", 1.9),
    ("victory", 2.8),
    ("volatile", -1.0),
    ("volatility", -0.9),
    ("vulnerable", -0.9),
    ("war", -2.9),
    ("warn", -0.9),
    ("warning", -1.4),
    ("warns", -0.8),
    ("weak", -1.9),
    ("weakness", -1.6),
    ("win", 2.8),
    ("wins", 2.7),
    ("winner", 2.8),
    ("wonderful", 2.7),
    ("worried", -1.2),
    ("worry", -1.9),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
];

/// Intensity modifiers. Positive entries amplify, negative entries dampen.
pub(crate) const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", B_INCR),
    ("amazingly", B_INCR),
    ("completely", B_INCR),
    ("considerably", B_INCR),
    ("deeply", B_INCR),
    ("enormously", B_INCR),
    ("especially", B_INCR),
    ("exceptionally", B_INCR),
    ("extremely", B_INCR),
    ("greatly", B_INCR),
    ("highly", B_INCR),
    ("hugely", B_INCR),
    ("incredibly", B_INCR),
    ("intensely", B_INCR),
    ("majorly", B_INCR),
    ("more", B_INCR),
    ("most", B_INCR),
    ("particularly", B_INCR),
    ("purely", B_INCR),
    ("quite", B_INCR),
    ("really", B_INCR),
    ("remarkably", B_INCR),
    ("sharply", B_INCR),
    ("so", B_INCR),
    ("substantially", B_INCR),
    ("thoroughly", B_INCR),
    ("totally", B_INCR),
    ("tremendously", B_INCR),
    ("uber", B_INCR),
    ("unbelievably", B_INCR),
    ("utterly", B_INCR),
    ("very", B_INCR),
    ("almost", B_DECR),
    ("barely", B_DECR),
    ("hardly", B_DECR),
    ("less", B_DECR),
    ("little", B_DECR),
    ("marginally", B_DECR),
    ("modestly", B_DECR),
    ("occasionally", B_DECR),
    ("partly", B_DECR),
    ("scarcely", B_DECR),
    ("slightly", B_DECR),
    ("somewhat", B_DECR),
];

/// Words that flip the valence of a following lexicon word.
/// Any token containing `n't` is treated as a negation as well.
pub(crate) const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont", "hadnt",
    "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "never", "none", "nope", "nor",
    "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "wasnt", "werent", "without",
    "wont", "wouldnt", "rarely", "seldom", "despite",
];

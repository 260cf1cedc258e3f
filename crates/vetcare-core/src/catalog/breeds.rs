//! Breed reference lists for the Chilean market, with typo-tolerant lookup.

use strsim::jaro_winkler;

use crate::models::Species;

/// Minimum similarity for a breed suggestion to be offered.
const SUGGESTION_THRESHOLD: f64 = 0.85;

pub const DOG_BREEDS: &[&str] = &[
    // Razas toy y miniatura
    "Affenpinscher",
    "Bichón Frisé",
    "Bichón Maltés",
    "Boston Terrier",
    "Caniche Toy",
    "Cavalier King Charles Spaniel",
    "Chihuahua",
    "Chinese Crested",
    "Griffón de Bruselas",
    "Havanese",
    "Jack Russell Terrier",
    "Japanese Chin",
    "Lhasa Apso",
    "Papillon",
    "Pekinés",
    "Pomerania",
    "Pug",
    "Schnauzer Miniatura",
    "Shih Tzu",
    "Silky Terrier",
    "Toy Fox Terrier",
    "Yorkshire Terrier",
    // Razas pequeñas
    "Basset Hound",
    "Beagle",
    "Border Terrier",
    "Cairn Terrier",
    "Caniche Mediano",
    "Cocker Spaniel Americano",
    "Cocker Spaniel Inglés",
    "Corgi Galés de Cardigan",
    "Corgi Galés de Pembroke",
    "Dachshund",
    "Fox Terrier",
    "French Bulldog",
    "Parson Russell Terrier",
    "Scottish Terrier",
    "Sealyham Terrier",
    "Shetland Sheepdog",
    "Springer Spaniel Inglés",
    "Staffordshire Bull Terrier",
    "Terrier Tibetano",
    "West Highland White Terrier",
    "Wire Fox Terrier",
    // Razas medianas
    "American Staffordshire Terrier",
    "Australian Cattle Dog",
    "Australian Shepherd",
    "Basenji",
    "Border Collie",
    "Brittany",
    "Bull Terrier",
    "Bulldog Inglés",
    "Caniche Estándar",
    "Chow Chow",
    "Dálmata",
    "Finnish Spitz",
    "Golden Retriever",
    "Keeshond",
    "Labrador Retriever",
    "Pastor Australiano",
    "Pointer",
    "Samoyed",
    "Siberian Husky",
    "Standard Schnauzer",
    "Vizsla",
    "Weimaraner",
    "Whippet",
    // Razas grandes
    "Afgano",
    "Airedale Terrier",
    "Akita",
    "Alaskan Malamute",
    "Bernese Mountain Dog",
    "Bloodhound",
    "Borzoi",
    "Boxer",
    "Chesapeake Bay Retriever",
    "Collie",
    "Doberman Pinscher",
    "Flat-Coated Retriever",
    "German Shepherd",
    "Giant Schnauzer",
    "Gordon Setter",
    "Greyhound",
    "Irish Setter",
    "Irish Wolfhound",
    "Newfoundland",
    "Old English Sheepdog",
    "Otterhound",
    "Pointer Alemán de Pelo Corto",
    "Ridgeback de Rodesia",
    "Rottweiler",
    "Saint Bernard",
    "Setter Inglés",
    "Setter Irlandés",
    // Razas gigantes
    "Dogo Alemán (Gran Danés)",
    "Leonberger",
    "Mastiff",
    "Mastiff Napolitano",
    "Mastín Español",
    "Mastín Tibetano",
    "Terranova",
    // Razas chilenas y sudamericanas
    "Terrier Chileno",
    "Quiltro (Mestizo)",
    // Otras
    "Mestizo",
    "Criollo",
    "Sin raza definida",
];

pub const CAT_BREEDS: &[&str] = &[
    // Pelo corto
    "Abisinio",
    "American Curl",
    "American Shorthair",
    "American Wirehair",
    "Bengalí",
    "Bombay",
    "British Shorthair",
    "Burmés",
    "Chartreux",
    "Cornish Rex",
    "Devon Rex",
    "Egyptian Mau",
    "European Shorthair",
    "Exótico de Pelo Corto",
    "Habana Brown",
    "Japanese Bobtail",
    "Korat",
    "Manx",
    "Ocicat",
    "Oriental",
    "Russian Blue",
    "Scottish Fold",
    "Selkirk Rex",
    "Siamés",
    "Singapura",
    "Sphynx",
    "Tonkinés",
    // Pelo largo
    "Angora Turco",
    "Balinés",
    "Birmano",
    "Maine Coon",
    "Noruego del Bosque",
    "Persa",
    "Ragdoll",
    "Sagrado de Birmania",
    "Siberiano",
    "Somali",
    "Van Turco",
    // Menos comunes
    "LaPerm",
    "Pixie Bob",
    "Ragamuffin",
    "Snowshoe",
    // Categorías generales
    "Mestizo",
    "Criollo",
    "Común Europeo",
    "Sin raza definida",
];

/// Generic fallback for unsupported species.
const GENERIC_BREEDS: &[&str] = &["Sin raza definida", "Mestizo"];

/// Breed list for a species.
pub fn breeds_for(species: Species) -> &'static [&'static str] {
    match species {
        Species::Canine => DOG_BREEDS,
        Species::Feline => CAT_BREEDS,
        Species::Other => GENERIC_BREEDS,
    }
}

/// Exact (case-insensitive) breed lookup.
pub fn find_breed(species: Species, name: &str) -> Option<&'static str> {
    let lower = name.trim().to_lowercase();
    breeds_for(species)
        .iter()
        .find(|b| b.to_lowercase() == lower)
        .copied()
}

/// Closest breed for a misspelled entry, when similar enough to suggest.
pub fn suggest_breed(species: Species, name: &str) -> Option<&'static str> {
    let lower = name.trim().to_lowercase();
    if lower.is_empty() {
        return None;
    }
    breeds_for(species)
        .iter()
        .map(|b| (*b, jaro_winkler(&lower, &b.to_lowercase())))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(breed, _)| breed)
}

// Speaker data shown on the circular gallery.

/// One confirmed speaker card: name, role line, and talk topic.
#[derive(Clone, Copy, Debug)]
pub struct Speaker {
    pub name: &'static str,
    pub role: &'static str,
    pub topic: &'static str,
}

pub const SPEAKERS: &[Speaker] = &[
    Speaker {
        name: "Patricia Escabias Prieto",
        role: "Education Project Manager • Letcraft Educación (España)",
        topic: "Minecraft Education para el aprendizaje de Ciencias",
    },
    Speaker {
        name: "William Castillo Toloza",
        role: "CEO Libros Mágicos • Experto en IA (Colombia)",
        topic: "Investigación potenciada con Inteligencia Artificial",
    },
    Speaker {
        name: "Deylin Hernández",
        role: "Educadora en Pedagogías Alternativas (Panamá)",
        topic: "Artes en la Ciencia: Pensamiento Artístico",
    },
    Speaker {
        name: "Roxana de León",
        role: "Doctora en Ciencias (México)",
        topic: "Cultura Científica: Toma de decisiones",
    },
];

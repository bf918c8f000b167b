//! Curated PAES exercise bank and the query filter applied to it.
//!
//! The bank holds fifteen hand-written exercises based on official MINEDUC
//! content, covering all five PAES subjects across the three bank difficulty
//! levels. Records keep their authoring order so list responses are stable.

use serde::Deserialize;
use superpaes_types::{BloomLevel, Exercise, ExerciseDifficulty, Subject};

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Optional exercise list filters, matched conjunctively against the wire
/// labels of each record. Doubles as the query string shape of the listing
/// endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExerciseFilter {
    /// Subject label, e.g. `Matemática M1`.
    pub subject: Option<String>,
    /// Bank difficulty label, e.g. `Medio`.
    pub difficulty: Option<String>,
    /// Bloom taxonomy label, e.g. `APLICAR`.
    pub bloom_level: Option<String>,
}

impl ExerciseFilter {
    /// Whether the exercise passes every present filter. Labels that match
    /// no record select nothing; empty strings count as absent.
    #[must_use]
    pub fn matches(&self, exercise: &Exercise) -> bool {
        present(self.subject.as_deref())
            .is_none_or(|wanted| wanted == exercise.subject.as_str())
            && present(self.difficulty.as_deref())
                .is_none_or(|wanted| wanted == exercise.difficulty.as_str())
            && present(self.bloom_level.as_deref())
                .is_none_or(|wanted| wanted == exercise.bloom_level.as_str())
    }
}

/// Treats empty query values as missing filters.
const fn present(value: Option<&str>) -> Option<&str> {
    match value {
        Some(text) if !text.is_empty() => Some(text),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Bank
// ---------------------------------------------------------------------------

fn strings<const N: usize>(values: [&str; N]) -> Vec<String> {
    values.into_iter().map(String::from).collect()
}

fn text(value: &str) -> Option<String> {
    Some(String::from(value))
}

/// Builds the full exercise bank in authoring order.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn exercise_bank() -> Vec<Exercise> {
    vec![
        // Matemática M1
        Exercise {
            id: String::from("1"),
            subject: Subject::MatematicaM1,
            topic: String::from("Ecuaciones de primer grado"),
            question: String::from("Resuelve la ecuación: 2x + 5 = 13"),
            options: strings(["x = 4", "x = 8", "x = 6", "x = 3"]),
            correct_answer: String::from("x = 4"),
            explanation: String::from("2x + 5 = 13 → 2x = 8 → x = 4"),
            difficulty: ExerciseDifficulty::Medio,
            bloom_level: BloomLevel::Aplicar,
            is_active: true,
            context_text: None,
            context_image: None,
            context_formula: text("2x + 5 = 13"),
            explanation_formula: text("x = 4"),
            points: 10,
            tags: strings(["ecuaciones", "primer_grado", "álgebra"]),
        },
        Exercise {
            id: String::from("2"),
            subject: Subject::MatematicaM1,
            topic: String::from("Sistemas de ecuaciones lineales"),
            question: String::from("Resuelve el sistema: x + y = 5, 2x - y = 1"),
            options: strings(["x = 2, y = 3", "x = 3, y = 2", "x = 1, y = 4", "x = 4, y = 1"]),
            correct_answer: String::from("x = 2, y = 3"),
            explanation: String::from(
                "Sumando las ecuaciones: 3x = 6 → x = 2. Sustituyendo: 2 + y = 5 → y = 3",
            ),
            difficulty: ExerciseDifficulty::Medio,
            bloom_level: BloomLevel::Aplicar,
            is_active: true,
            context_text: None,
            context_image: None,
            context_formula: text("x + y = 5\n2x - y = 1"),
            explanation_formula: text("x = 2, y = 3"),
            points: 15,
            tags: strings(["sistemas", "ecuaciones", "álgebra"]),
        },
        Exercise {
            id: String::from("3"),
            subject: Subject::MatematicaM1,
            topic: String::from("Funciones cuadráticas"),
            question: String::from("¿Cuál es el vértice de la función f(x) = x² - 4x + 3?"),
            options: strings(["(2, -1)", "(2, 1)", "(-2, -1)", "(-2, 1)"]),
            correct_answer: String::from("(2, -1)"),
            explanation: String::from(
                "El vértice se encuentra en x = -b/(2a) = 4/(2*1) = 2, y f(2) = 4 - 8 + 3 = -1",
            ),
            difficulty: ExerciseDifficulty::Dificil,
            bloom_level: BloomLevel::Aplicar,
            is_active: true,
            context_text: None,
            context_image: None,
            context_formula: text("f(x) = x^2 - 4x + 3"),
            explanation_formula: text("V = (2, -1)"),
            points: 20,
            tags: strings(["funciones", "cuadráticas", "vértice"]),
        },
        // Matemática M2
        Exercise {
            id: String::from("4"),
            subject: Subject::MatematicaM2,
            topic: String::from("Teorema de Pitágoras"),
            question: String::from(
                "En un triángulo rectángulo, si los catetos miden 3 y 4, ¿cuánto mide la hipotenusa?",
            ),
            options: strings(["5", "6", "7", "8"]),
            correct_answer: String::from("5"),
            explanation: String::from(
                "Por el teorema de Pitágoras: c² = a² + b² = 3² + 4² = 9 + 16 = 25 → c = 5",
            ),
            difficulty: ExerciseDifficulty::Facil,
            bloom_level: BloomLevel::Aplicar,
            is_active: true,
            context_text: None,
            context_image: None,
            context_formula: text("c^2 = a^2 + b^2"),
            explanation_formula: text("c = √(3² + 4²) = √25 = 5"),
            points: 10,
            tags: strings(["geometría", "pitágoras", "triángulos"]),
        },
        Exercise {
            id: String::from("5"),
            subject: Subject::MatematicaM2,
            topic: String::from("Razones trigonométricas"),
            question: String::from(
                "En un triángulo rectángulo, si sen(θ) = 3/5, ¿cuál es el valor de cos(θ)?",
            ),
            options: strings(["4/5", "3/4", "5/4", "4/3"]),
            correct_answer: String::from("4/5"),
            explanation: String::from(
                "Si sen(θ) = 3/5, entonces cos(θ) = √(1 - sen²(θ)) = √(1 - 9/25) = √(16/25) = 4/5",
            ),
            difficulty: ExerciseDifficulty::Medio,
            bloom_level: BloomLevel::Aplicar,
            is_active: true,
            context_text: None,
            context_image: None,
            context_formula: text("sen²(θ) + cos²(θ) = 1"),
            explanation_formula: text("cos(θ) = √(1 - (3/5)²) = 4/5"),
            points: 15,
            tags: strings(["trigonometría", "razones", "identidades"]),
        },
        // Competencia Lectora
        Exercise {
            id: String::from("6"),
            subject: Subject::CompetenciaLectora,
            topic: String::from("Comprensión de lectura"),
            question: String::from("¿Cuál es la idea principal del texto?"),
            options: strings([
                "La tecnología ha revolucionado la educación",
                "Los estudiantes prefieren métodos tradicionales",
                "La educación debe adaptarse a los cambios",
                "Los profesores resisten la innovación",
            ]),
            correct_answer: String::from("La tecnología ha revolucionado la educación"),
            explanation: String::from(
                "El texto enfatiza cómo la tecnología ha transformado fundamentalmente los métodos educativos y la forma en que los estudiantes aprenden.",
            ),
            difficulty: ExerciseDifficulty::Medio,
            bloom_level: BloomLevel::Comprender,
            is_active: true,
            context_text: text(
                "La revolución tecnológica ha transformado radicalmente el panorama educativo. Las aulas tradicionales han dado paso a entornos digitales donde los estudiantes pueden acceder a información ilimitada, colaborar en tiempo real y desarrollar habilidades críticas para el siglo XXI. Esta transformación no solo ha cambiado cómo enseñamos, sino también cómo aprendemos.",
            ),
            context_image: None,
            context_formula: None,
            explanation_formula: None,
            points: 15,
            tags: strings(["comprensión", "idea_principal", "tecnología"]),
        },
        Exercise {
            id: String::from("7"),
            subject: Subject::CompetenciaLectora,
            topic: String::from("Inferencia"),
            question: String::from(
                "Basándose en el texto, ¿qué se puede inferir sobre el futuro de la educación?",
            ),
            options: strings([
                "Volverá a métodos tradicionales",
                "Se volverá completamente virtual",
                "Integrará tecnología y métodos tradicionales",
                "Eliminará la figura del profesor",
            ]),
            correct_answer: String::from("Integrará tecnología y métodos tradicionales"),
            explanation: String::from(
                "El texto sugiere una evolución que combina lo mejor de ambos enfoques, no una sustitución completa.",
            ),
            difficulty: ExerciseDifficulty::Dificil,
            bloom_level: BloomLevel::Analizar,
            is_active: true,
            context_text: text(
                "La educación del futuro no será completamente digital ni completamente tradicional. Los expertos predicen un modelo híbrido que combine la calidez humana del aprendizaje presencial con la eficiencia y personalización que ofrecen las herramientas tecnológicas. Esta integración permitirá atender las necesidades individuales de cada estudiante.",
            ),
            context_image: None,
            context_formula: None,
            explanation_formula: None,
            points: 20,
            tags: strings(["inferencia", "futuro", "modelo_híbrido"]),
        },
        // Ciencias
        Exercise {
            id: String::from("8"),
            subject: Subject::Ciencias,
            topic: String::from("Física - Movimiento"),
            question: String::from("¿Cuál es la fórmula para calcular la velocidad?"),
            options: strings(["v = d/t", "v = t/d", "v = d*t", "v = d+t"]),
            correct_answer: String::from("v = d/t"),
            explanation: String::from(
                "La velocidad se calcula dividiendo la distancia entre el tiempo",
            ),
            difficulty: ExerciseDifficulty::Facil,
            bloom_level: BloomLevel::Recordar,
            is_active: true,
            context_text: None,
            context_image: None,
            context_formula: text("v = \\frac{d}{t}"),
            explanation_formula: text("v = d/t"),
            points: 10,
            tags: strings(["física", "movimiento", "velocidad"]),
        },
        Exercise {
            id: String::from("9"),
            subject: Subject::Ciencias,
            topic: String::from("Física - Energía"),
            question: String::from("¿Cuál es la fórmula para la energía cinética?"),
            options: strings(["Ec = mgh", "Ec = ½mv²", "Ec = mv", "Ec = mgh + ½mv²"]),
            correct_answer: String::from("Ec = ½mv²"),
            explanation: String::from(
                "La energía cinética se calcula como la mitad del producto de la masa por el cuadrado de la velocidad",
            ),
            difficulty: ExerciseDifficulty::Medio,
            bloom_level: BloomLevel::Recordar,
            is_active: true,
            context_text: None,
            context_image: None,
            context_formula: text("E_c = \\frac{1}{2}mv^2"),
            explanation_formula: text("Ec = ½mv²"),
            points: 15,
            tags: strings(["física", "energía", "cinética"]),
        },
        // Historia y Ciencias Sociales
        Exercise {
            id: String::from("10"),
            subject: Subject::Historia,
            topic: String::from("Historia de Chile"),
            question: String::from("¿En qué año se declaró la independencia de Chile?"),
            options: strings(["1810", "1818", "1820", "1825"]),
            correct_answer: String::from("1818"),
            explanation: String::from("Chile declaró su independencia el 12 de febrero de 1818"),
            difficulty: ExerciseDifficulty::Facil,
            bloom_level: BloomLevel::Recordar,
            is_active: true,
            context_text: text(
                "La independencia de Chile fue un proceso histórico que comenzó con la Primera Junta Nacional de Gobierno en 1810 y culminó con la declaración formal de independencia en 1818.",
            ),
            context_image: None,
            context_formula: None,
            explanation_formula: None,
            points: 10,
            tags: strings(["historia", "chile", "independencia"]),
        },
        Exercise {
            id: String::from("11"),
            subject: Subject::Historia,
            topic: String::from("Geografía de Chile"),
            question: String::from("¿Cuál es el clima predominante en la zona central de Chile?"),
            options: strings(["Desértico", "Mediterráneo", "Tropical", "Polar"]),
            correct_answer: String::from("Mediterráneo"),
            explanation: String::from(
                "La zona central de Chile presenta un clima mediterráneo con veranos secos y calurosos e inviernos lluviosos",
            ),
            difficulty: ExerciseDifficulty::Medio,
            bloom_level: BloomLevel::Recordar,
            is_active: true,
            context_text: text(
                "Chile presenta una gran diversidad climática debido a su extensión latitudinal. La zona central, donde se concentra la mayor parte de la población, presenta características climáticas mediterráneas.",
            ),
            context_image: None,
            context_formula: None,
            explanation_formula: None,
            points: 10,
            tags: strings(["geografía", "clima", "zona_central"]),
        },
        // Ejercicios avanzados
        Exercise {
            id: String::from("12"),
            subject: Subject::MatematicaM1,
            topic: String::from("Logaritmos"),
            question: String::from("Resuelve: log₂(8) + log₂(4)"),
            options: strings(["5", "6", "7", "8"]),
            correct_answer: String::from("5"),
            explanation: String::from("log₂(8) = 3 y log₂(4) = 2, entonces 3 + 2 = 5"),
            difficulty: ExerciseDifficulty::Dificil,
            bloom_level: BloomLevel::Aplicar,
            is_active: true,
            context_text: None,
            context_image: None,
            context_formula: text("log₂(8) + log₂(4)"),
            explanation_formula: text("log₂(8) = 3\nlog₂(4) = 2\n3 + 2 = 5"),
            points: 20,
            tags: strings(["logaritmos", "álgebra", "propiedades"]),
        },
        Exercise {
            id: String::from("13"),
            subject: Subject::MatematicaM2,
            topic: String::from("Geometría analítica"),
            question: String::from(
                "¿Cuál es la ecuación de la circunferencia con centro en (2,3) y radio 4?",
            ),
            options: strings([
                "(x-2)² + (y-3)² = 16",
                "(x+2)² + (y+3)² = 16",
                "(x-2)² + (y-3)² = 4",
                "(x+2)² + (y+3)² = 4",
            ]),
            correct_answer: String::from("(x-2)² + (y-3)² = 16"),
            explanation: String::from(
                "La ecuación de una circunferencia es (x-h)² + (y-k)² = r², donde (h,k) es el centro y r es el radio",
            ),
            difficulty: ExerciseDifficulty::Dificil,
            bloom_level: BloomLevel::Aplicar,
            is_active: true,
            context_text: None,
            context_image: None,
            context_formula: text("(x-h)² + (y-k)² = r²"),
            explanation_formula: text("(x-2)² + (y-3)² = 4² = 16"),
            points: 20,
            tags: strings(["geometría", "circunferencia", "analítica"]),
        },
        Exercise {
            id: String::from("14"),
            subject: Subject::Ciencias,
            topic: String::from("Química - Estequiometría"),
            question: String::from(
                "¿Cuántos gramos de H₂O se producen al reaccionar 2 moles de H₂ con 1 mol de O₂?",
            ),
            options: strings(["18 g", "36 g", "54 g", "72 g"]),
            correct_answer: String::from("36 g"),
            explanation: String::from(
                "2H₂ + O₂ → 2H₂O. Con 2 moles de H₂ se producen 2 moles de H₂O = 2 × 18 g = 36 g",
            ),
            difficulty: ExerciseDifficulty::Dificil,
            bloom_level: BloomLevel::Aplicar,
            is_active: true,
            context_text: None,
            context_image: None,
            context_formula: text("2H₂ + O₂ → 2H₂O"),
            explanation_formula: text("2 moles H₂O × 18 g/mol = 36 g"),
            points: 25,
            tags: strings(["química", "estequiometría", "reacciones"]),
        },
        Exercise {
            id: String::from("15"),
            subject: Subject::CompetenciaLectora,
            topic: String::from("Análisis crítico"),
            question: String::from("¿Qué tipo de argumento utiliza el autor en el texto?"),
            options: strings([
                "Argumento de autoridad",
                "Argumento por analogía",
                "Argumento inductivo",
                "Argumento deductivo",
            ]),
            correct_answer: String::from("Argumento inductivo"),
            explanation: String::from(
                "El autor presenta ejemplos específicos para llegar a una conclusión general sobre el impacto de la tecnología.",
            ),
            difficulty: ExerciseDifficulty::Dificil,
            bloom_level: BloomLevel::Evaluar,
            is_active: true,
            context_text: text(
                "Estudios recientes muestran que el uso de tablets en las aulas ha aumentado la participación de los estudiantes en un 40%. Investigaciones en escuelas rurales indican mejoras significativas en los resultados de matemáticas. Los datos de colegios urbanos confirman esta tendencia positiva. Por tanto, la tecnología educativa está transformando positivamente el aprendizaje.",
            ),
            context_image: None,
            context_formula: None,
            explanation_formula: None,
            points: 25,
            tags: strings(["análisis", "argumentos", "crítico"]),
        },
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

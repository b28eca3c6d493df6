//! Everything the page says. Static and never mutated.

use crate::config;
use crate::icons::Icon;

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEvent {
    pub date: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub path: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}

impl Photo {
    pub fn src(&self) -> String {
        format!("{}{}", config::asset_base(), self.path)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MomentCategory {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    /// CSS background of the card.
    pub background: &'static str,
    pub photos: &'static [Photo],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dream {
    pub text: &'static str,
    pub icon: Icon,
    pub completed: bool,
}

pub static TIMELINE: [TimelineEvent; 6] = [
    TimelineEvent {
        date: "O Primeiro Olhar",
        title: "Como Nos Conhecemos",
        description: "Eu te achei no Instagram e pensei: essa é a garota mais linda do mundo, eu preciso tentar falar com ela. Mas como você quase nunca postava story, tive que esperar por um tempo até que você postasse algo para eu responder. E assim que começamos a nos falar, a conexão foi instantânea, energia boa e uma pitada de amor logo no primeiro momento.",
        icon: Icon::Sparkles,
    },
    TimelineEvent {
        date: "20/11/2025",
        title: "O Início de Tudo",
        description: "A primeira vez que nos vimos foi marcando um treino na minha academia. Depois daquele dia, já tínhamos a certeza de que estávamos com a pessoa certa.",
        icon: Icon::Heart,
    },
    TimelineEvent {
        date: "Nosso Primeiro Encontro",
        title: "Casa Fontana",
        description: "Fomos comer em um restaurante italiano, o Casa Fontana. Foi um bate-papo incrível a noite toda, sempre tínhamos assunto e nunca deixamos a conversa esfriar. E assim tivemos mais certeza ainda de que estávamos no caminho certo.",
        icon: Icon::Utensils,
    },
    TimelineEvent {
        date: "Momentos Inesquecíveis",
        title: "Nossas Aventuras",
        description: "Cada passeio, cada jantar, cada risada compartilhada construiu os alicerces do nosso amor.",
        icon: Icon::Calendar,
    },
    TimelineEvent {
        date: "O Compromisso",
        title: "Nosso Namoro",
        description: "Decidimos oficializar nosso amor e começar a escrever nossa história como um casal.",
        icon: Icon::Gem,
    },
    TimelineEvent {
        date: "O Futuro",
        title: "Nossos Sonhos",
        description: "Olhamos para o futuro com esperança e amor, prontos para construir uma vida linda juntos.",
        icon: Icon::Home,
    },
];

const fn photo(path: &'static str, alt: &'static str, caption: &'static str) -> Photo {
    Photo { path, alt, caption }
}

pub static GALLERY: [Photo; 13] = [
    photo("photos/casal1.jpg", "Momento especial", "Juntos em cada celebração"),
    photo("photos/casal2.jpg", "Olhar de amor", "Seus olhos são meu lar"),
    photo("photos/ela1.jpg", "Jantar romântico", "Momentos especiais a dois"),
    photo("photos/ela2.jpg", "Sorriso lindo", "Seu sorriso ilumina meu dia"),
    photo("photos/ela3.jpg", "Pose perfeita", "A mulher da minha vida"),
    photo("photos/ela4.jpg", "Selfie", "Linda em cada ângulo"),
    photo("photos/ela5.jpg", "Momento doce", "Doce como você"),
    photo("photos/casal3.jpg", "Espelho", "Nós dois, sempre"),
    photo("photos/casal4.jpg", "Close", "Amor em cada detalhe"),
    photo("photos/casal5.jpg", "Abraço", "Seu abraço é meu refúgio"),
    photo("photos/casal6.jpg", "Casal casual", "Perfeitos juntos"),
    photo("photos/casal7.jpg", "Praia", "Verão ao seu lado"),
    photo("photos/casal8.jpg", "Ternura", "Meu amor eterno"),
];

static DINNERS: [Photo; 2] = [
    photo("photos/casal1.jpg", "Nosso jantar especial", "Nosso jantar especial"),
    photo("photos/casal2.jpg", "Sempre juntos à mesa", "Sempre juntos à mesa"),
];

static PARTIES: [Photo; 2] = [
    photo("photos/casal3.jpg", "Comemorando juntos", "Comemorando juntos"),
    photo("photos/casal4.jpg", "Sempre celebrando o amor", "Sempre celebrando o amor"),
];

static TRIPS: [Photo; 2] = [
    photo("photos/casal5.jpg", "Aventureiros de coração", "Aventureiros de coração"),
    photo("photos/casal7.jpg", "Explorando o mundo juntos", "Explorando o mundo juntos"),
];

static LAUGHS: [Photo; 2] = [
    photo("photos/casal6.jpg", "Risadas garantidas", "Risadas garantidas"),
    photo("photos/casal8.jpg", "Aquele sorriso que amo", "Aquele sorriso que amo"),
];

pub static MOMENTS: [MomentCategory; 4] = [
    MomentCategory {
        title: "Jantares Românticos",
        description: "Cada refeição ao seu lado se torna um momento inesquecível, cheio de risadas, conversas e muito amor.",
        icon: Icon::Utensils,
        background: "linear-gradient(135deg, rgba(255,182,193,0.9) 0%, rgba(255,105,180,0.9) 100%)",
        photos: &DINNERS,
    },
    MomentCategory {
        title: "Festas e Celebrações",
        description: "Dançamos, celebramos e criamos memórias que vamos guardar para sempre em nossos corações.",
        icon: Icon::PartyPopper,
        background: "linear-gradient(135deg, rgba(167,139,250,0.9) 0%, rgba(236,72,153,0.9) 100%)",
        photos: &PARTIES,
    },
    MomentCategory {
        title: "Viagens e Passeios",
        description: "Explorar o mundo ao seu lado é o maior presente. Cada lugar fica mais bonito com você.",
        icon: Icon::Plane,
        background: "linear-gradient(135deg, rgba(96,165,250,0.9) 0%, rgba(6,182,212,0.9) 100%)",
        photos: &TRIPS,
    },
    MomentCategory {
        title: "Momentos Engraçados",
        description: "Suas gargalhadas são a melhor música para meus ouvidos. Você me faz rir todos os dias.",
        icon: Icon::Laugh,
        background: "linear-gradient(135deg, rgba(250,204,21,0.9) 0%, rgba(249,115,22,0.9) 100%)",
        photos: &LAUGHS,
    },
];

const fn dream(text: &'static str, icon: Icon, completed: bool) -> Dream {
    Dream { text, icon, completed }
}

pub static DREAMS: [Dream; 10] = [
    dream("Viajar pelo mundo juntos", Icon::Plane, false),
    dream("Construir nosso lar dos sonhos", Icon::Home, false),
    dream("Ter filhos lindos", Icon::Baby, false),
    dream("Casamento inesquecível", Icon::Heart, false),
    dream("Ver o pôr do sol em Paris", Icon::Star, false),
    dream("Fazer uma viagem de carro pela estrada", Icon::MapPin, false),
    dream("Aprender a dançar juntos", Icon::Music, false),
    dream("Criar um álbum de fotos de todas as nossas aventuras", Icon::Camera, false),
    dream("Celebrar 50 anos de casados", Icon::Gift, false),
    dream("Crescer juntos, sempre", Icon::Heart, true),
];

/// Completed dreams, total dreams and the rounded completion percentage.
pub fn dream_progress(dreams: &[Dream]) -> (usize, usize, u8) {
    let total = dreams.len();
    let completed = dreams.iter().filter(|d| d.completed).count();
    let percent = if total == 0 {
        0
    } else {
        (completed as f64 / total as f64 * 100.0).round() as u8
    };
    (completed, total, percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_sizes() {
        assert_eq!(TIMELINE.len(), 6);
        assert_eq!(GALLERY.len(), 13);
        assert_eq!(MOMENTS.len(), 4);
        assert!(MOMENTS.iter().all(|m| m.photos.len() == 2));
        assert_eq!(DREAMS.len(), 10);
    }

    #[test]
    fn one_dream_completed() {
        assert_eq!(dream_progress(&DREAMS), (1, 10, 10));
        assert_eq!(DREAMS.iter().position(|d| d.completed), Some(9));
    }

    #[test]
    fn progress_of_edge_cases() {
        assert_eq!(dream_progress(&[]), (0, 0, 0));
        let three = [
            dream("a", Icon::Star, true),
            dream("b", Icon::Star, false),
            dream("c", Icon::Star, false),
        ];
        assert_eq!(dream_progress(&three), (1, 3, 33));
    }

    #[test]
    fn photo_paths_are_relative() {
        for photo in GALLERY.iter().chain(MOMENTS.iter().flat_map(|m| m.photos.iter())) {
            assert!(photo.path.starts_with("photos/"));
            assert!(photo.src().ends_with(photo.path));
        }
    }
}

//! Forecast and trend texts for every supported language.

use crate::config::Language;
use crate::zambretti::Trend;

pub struct Texts {
    /// Zambretti phrases for the letters `A` to `Z`
    pub forecasts: [&'static str; 26],
    /// Indexed in `Trend` declaration order
    pub trends: [&'static str; 7],
    pub no_forecast: &'static str,
}

impl Texts {
    pub fn forecast(&self, letter: char) -> &'static str {
        if letter.is_ascii_uppercase() {
            self.forecasts[(letter as u8 - b'A') as usize]
        } else {
            self.no_forecast
        }
    }

    pub fn trend(&self, trend: Trend) -> &'static str {
        self.trends[trend.index()]
    }
}

impl Language {
    pub fn texts(self) -> &'static Texts {
        match self {
            Language::En => &EN,
            Language::De => &DE,
            Language::Fr => &FR,
            Language::It => &IT,
            Language::Pl => &PL,
            Language::Ro => &RO,
            Language::Sp => &SP,
            Language::Tr => &TR,
            Language::Nl => &NL,
            Language::No => &NO,
        }
    }
}

static EN: Texts = Texts {
    forecasts: [
        "Settled fine weather",
        "Fine weather",
        "Becoming fine",
        "Fine, becoming less settled",
        "Fine, possibly showers",
        "Fairly fine, improving",
        "Fairly fine, possibly showers early",
        "Fairly fine, showers later",
        "Showery early, improving",
        "Changeable, improving",
        "Fairly fine, showers likely",
        "Rather unsettled, clearing later",
        "Unsettled, probably improving",
        "Showery, bright intervals",
        "Showery, becoming unsettled",
        "Changeable, some rain",
        "Unsettled, short fine intervals",
        "Unsettled, rain later",
        "Unsettled, rain at times",
        "Very unsettled, finer at times",
        "Rain at times, worse later",
        "Rain at times, becoming very unsettled",
        "Rain at frequent intervals",
        "Very unsettled, rain",
        "Stormy, possibly improving",
        "Stormy, much rain",
    ],
    trends: [
        "Rising fast",
        "Rising",
        "Rising slow",
        "Steady",
        "Falling slow",
        "Falling",
        "Falling fast",
    ],
    no_forecast: "No forecast available",
};

static DE: Texts = Texts {
    forecasts: [
        "Beständiges Schönwetter",
        "Schönes Wetter",
        "Wetter wird gut",
        "Schön, wird wechselhaft",
        "Schön, Regenschauer möglich",
        "Heiter bis wolkig, Besserung zu erwarten",
        "Heiter bis wolkig, anfangs Schauer möglich",
        "Heiter bis wolkig, später Regenschauer",
        "Früh Schauer, Besserung zu erwarten",
        "Wechselhaft, Besserung zu erwarten",
        "Heiter bis wolkig, Schauer wahrscheinlich",
        "Unbeständig, später Aufklarung",
        "Unbeständig, Besserung wahrscheinlich",
        "Regnerisch mit heiteren Phasen",
        "Regnerisch, wird unbeständig",
        "Wechselhaft mit etwas Regen",
        "Unbeständig, kurze heitere Phasen",
        "Unbeständig, später Regen",
        "Unbeständig, zeitweise Regen",
        "Sehr unbeständig, zeitweise besser",
        "Zeitweise Regen, wird schlechter",
        "Zeitweise Regen, sehr unbeständig",
        "Häufiger Regen",
        "Sehr unbeständig, Regen",
        "Stürmisch, Besserung wahrscheinlich",
        "Stürmisch, viel Regen",
    ],
    trends: [
        "Schnell steigend",
        "Steigend",
        "Langsam steigend",
        "Beständig",
        "Langsam fallend",
        "Fallend",
        "Schnell fallend",
    ],
    no_forecast: "Keine Vorhersage verfügbar",
};

static FR: Texts = Texts {
    forecasts: [
        "Beau temps stable",
        "Beau temps",
        "Devenant beau",
        "Beau, devenant moins stable",
        "Beau, averses possibles",
        "Assez beau, en amélioration",
        "Assez beau, averses possibles en début",
        "Assez beau, averses plus tard",
        "Averses en début, en amélioration",
        "Variable, en amélioration",
        "Assez beau, averses probables",
        "Plutôt instable, éclaircies plus tard",
        "Instable, amélioration probable",
        "Averses et éclaircies",
        "Averses, devenant instable",
        "Variable, quelques pluies",
        "Instable, courtes éclaircies",
        "Instable, pluie plus tard",
        "Instable, pluie par moments",
        "Très instable, éclaircies par moments",
        "Pluie par moments, aggravation",
        "Pluie par moments, devenant très instable",
        "Pluies fréquentes",
        "Très instable, pluie",
        "Orageux, amélioration possible",
        "Orageux, fortes pluies",
    ],
    trends: [
        "Hausse rapide",
        "Hausse",
        "Hausse lente",
        "Stable",
        "Baisse lente",
        "Baisse",
        "Baisse rapide",
    ],
    no_forecast: "Aucune prévision disponible",
};

static IT: Texts = Texts {
    forecasts: [
        "Bel tempo stabile",
        "Bel tempo",
        "In miglioramento",
        "Bello, tendente a instabile",
        "Bello, possibili rovesci",
        "Abbastanza bello, in miglioramento",
        "Abbastanza bello, possibili rovesci iniziali",
        "Abbastanza bello, rovesci in seguito",
        "Rovesci iniziali, in miglioramento",
        "Variabile, in miglioramento",
        "Abbastanza bello, probabili rovesci",
        "Piuttosto instabile, schiarite in seguito",
        "Instabile, probabile miglioramento",
        "Rovesci e schiarite",
        "Rovesci, tendente a instabile",
        "Variabile, qualche pioggia",
        "Instabile, brevi schiarite",
        "Instabile, pioggia in seguito",
        "Instabile, pioggia a tratti",
        "Molto instabile, a tratti migliore",
        "Pioggia a tratti, in peggioramento",
        "Pioggia a tratti, molto instabile",
        "Piogge frequenti",
        "Molto instabile, pioggia",
        "Tempestoso, possibile miglioramento",
        "Tempestoso, molta pioggia",
    ],
    trends: [
        "In rapido aumento",
        "In aumento",
        "In lento aumento",
        "Stabile",
        "In lento calo",
        "In calo",
        "In rapido calo",
    ],
    no_forecast: "Nessuna previsione disponibile",
};

static PL: Texts = Texts {
    forecasts: [
        "Stabilna ładna pogoda",
        "Ładna pogoda",
        "Poprawa pogody",
        "Ładnie, coraz mniej stabilnie",
        "Ładnie, możliwe przelotne opady",
        "Dość ładnie, poprawa",
        "Dość ładnie, wcześniej możliwe opady",
        "Dość ładnie, później przelotne opady",
        "Wcześniej przelotne opady, poprawa",
        "Zmiennie, poprawa",
        "Dość ładnie, prawdopodobne opady",
        "Raczej niestabilnie, później przejaśnienia",
        "Niestabilnie, prawdopodobna poprawa",
        "Przelotne opady, przejaśnienia",
        "Przelotne opady, coraz mniej stabilnie",
        "Zmiennie, trochę deszczu",
        "Niestabilnie, krótkie przejaśnienia",
        "Niestabilnie, później deszcz",
        "Niestabilnie, okresami deszcz",
        "Bardzo niestabilnie, okresami lepiej",
        "Okresami deszcz, pogorszenie",
        "Okresami deszcz, bardzo niestabilnie",
        "Częste opady deszczu",
        "Bardzo niestabilnie, deszcz",
        "Burzowo, możliwa poprawa",
        "Burzowo, dużo deszczu",
    ],
    trends: [
        "Szybko rośnie",
        "Rośnie",
        "Powoli rośnie",
        "Stabilne",
        "Powoli spada",
        "Spada",
        "Szybko spada",
    ],
    no_forecast: "Brak prognozy",
};

static RO: Texts = Texts {
    forecasts: [
        "Vreme frumoasă stabilă",
        "Vreme frumoasă",
        "Vremea se îmbunătățește",
        "Frumos, devine instabil",
        "Frumos, posibile averse",
        "Destul de frumos, în ameliorare",
        "Destul de frumos, posibile averse la început",
        "Destul de frumos, averse mai târziu",
        "Averse la început, în ameliorare",
        "Schimbător, în ameliorare",
        "Destul de frumos, averse probabile",
        "Destul de instabil, înseninări mai târziu",
        "Instabil, probabil ameliorare",
        "Averse cu înseninări",
        "Averse, devine instabil",
        "Schimbător, ceva ploaie",
        "Instabil, scurte înseninări",
        "Instabil, ploaie mai târziu",
        "Instabil, pe alocuri ploaie",
        "Foarte instabil, uneori mai frumos",
        "Pe alocuri ploaie, se înrăutățește",
        "Pe alocuri ploaie, devine foarte instabil",
        "Ploi frecvente",
        "Foarte instabil, ploaie",
        "Furtună, posibilă ameliorare",
        "Furtună, multă ploaie",
    ],
    trends: [
        "Crește rapid",
        "Crește",
        "Crește lent",
        "Stabil",
        "Scade lent",
        "Scade",
        "Scade rapid",
    ],
    no_forecast: "Nicio prognoză disponibilă",
};

static SP: Texts = Texts {
    forecasts: [
        "Buen tiempo estable",
        "Buen tiempo",
        "Mejorando",
        "Bueno, volviéndose inestable",
        "Bueno, posibles chubascos",
        "Bastante bueno, mejorando",
        "Bastante bueno, posibles chubascos al principio",
        "Bastante bueno, chubascos más tarde",
        "Chubascos al principio, mejorando",
        "Variable, mejorando",
        "Bastante bueno, chubascos probables",
        "Algo inestable, despejando más tarde",
        "Inestable, probablemente mejorando",
        "Chubascos con claros",
        "Chubascos, volviéndose inestable",
        "Variable, algo de lluvia",
        "Inestable, breves intervalos de buen tiempo",
        "Inestable, lluvia más tarde",
        "Inestable, lluvia a ratos",
        "Muy inestable, a ratos mejor",
        "Lluvia a ratos, empeorando",
        "Lluvia a ratos, volviéndose muy inestable",
        "Lluvia frecuente",
        "Muy inestable, lluvia",
        "Tormentoso, posible mejora",
        "Tormentoso, mucha lluvia",
    ],
    trends: [
        "Subiendo rápido",
        "Subiendo",
        "Subiendo despacio",
        "Estable",
        "Bajando despacio",
        "Bajando",
        "Bajando rápido",
    ],
    no_forecast: "Sin pronóstico disponible",
};

static TR: Texts = Texts {
    forecasts: [
        "Kararlı güzel hava",
        "Güzel hava",
        "Hava düzeliyor",
        "Güzel, kararsızlaşıyor",
        "Güzel, sağanak olası",
        "Oldukça güzel, düzeliyor",
        "Oldukça güzel, başlangıçta sağanak olası",
        "Oldukça güzel, sonra sağanak",
        "Başlangıçta sağanak, düzeliyor",
        "Değişken, düzeliyor",
        "Oldukça güzel, sağanak muhtemel",
        "Biraz kararsız, sonra açılıyor",
        "Kararsız, muhtemelen düzeliyor",
        "Sağanak, arada açık",
        "Sağanak, kararsızlaşıyor",
        "Değişken, biraz yağmur",
        "Kararsız, kısa açık aralıklar",
        "Kararsız, sonra yağmur",
        "Kararsız, ara sıra yağmur",
        "Çok kararsız, ara sıra daha iyi",
        "Ara sıra yağmur, kötüleşiyor",
        "Ara sıra yağmur, çok kararsızlaşıyor",
        "Sık sık yağmur",
        "Çok kararsız, yağmur",
        "Fırtınalı, düzelme olası",
        "Fırtınalı, bol yağmur",
    ],
    trends: [
        "Hızla yükseliyor",
        "Yükseliyor",
        "Yavaşça yükseliyor",
        "Sabit",
        "Yavaşça düşüyor",
        "Düşüyor",
        "Hızla düşüyor",
    ],
    no_forecast: "Tahmin yok",
};

static NL: Texts = Texts {
    forecasts: [
        "Bestendig mooi weer",
        "Mooi weer",
        "Wordt mooi",
        "Mooi, wordt minder bestendig",
        "Mooi, mogelijk buien",
        "Vrij mooi, verbeterend",
        "Vrij mooi, vroeg mogelijk buien",
        "Vrij mooi, later buien",
        "Vroeg buien, verbeterend",
        "Wisselvallig, verbeterend",
        "Vrij mooi, buien waarschijnlijk",
        "Nogal onbestendig, later opklaringen",
        "Onbestendig, waarschijnlijk verbeterend",
        "Buien met opklaringen",
        "Buien, wordt onbestendig",
        "Wisselvallig, wat regen",
        "Onbestendig, korte opklaringen",
        "Onbestendig, later regen",
        "Onbestendig, af en toe regen",
        "Zeer onbestendig, soms beter",
        "Af en toe regen, verslechterend",
        "Af en toe regen, wordt zeer onbestendig",
        "Regelmatig regen",
        "Zeer onbestendig, regen",
        "Stormachtig, mogelijk verbeterend",
        "Stormachtig, veel regen",
    ],
    trends: [
        "Snel stijgend",
        "Stijgend",
        "Langzaam stijgend",
        "Stabiel",
        "Langzaam dalend",
        "Dalend",
        "Snel dalend",
    ],
    no_forecast: "Geen voorspelling beschikbaar",
};

static NO: Texts = Texts {
    forecasts: [
        "Stabilt fint vær",
        "Fint vær",
        "Blir fint",
        "Fint, blir mindre stabilt",
        "Fint, mulige byger",
        "Ganske fint, bedring",
        "Ganske fint, mulige byger tidlig",
        "Ganske fint, byger senere",
        "Byger tidlig, bedring",
        "Skiftende, bedring",
        "Ganske fint, byger sannsynlig",
        "Ganske ustabilt, oppklarning senere",
        "Ustabilt, sannsynlig bedring",
        "Byger med oppholdsvær",
        "Byger, blir ustabilt",
        "Skiftende, noe regn",
        "Ustabilt, korte perioder med fint vær",
        "Ustabilt, regn senere",
        "Ustabilt, tidvis regn",
        "Svært ustabilt, tidvis bedre",
        "Tidvis regn, verre senere",
        "Tidvis regn, blir svært ustabilt",
        "Hyppige regnbyger",
        "Svært ustabilt, regn",
        "Stormfullt, mulig bedring",
        "Stormfullt, mye regn",
    ],
    trends: [
        "Stiger raskt",
        "Stiger",
        "Stiger sakte",
        "Stabilt",
        "Synker sakte",
        "Synker",
        "Synker raskt",
    ],
    no_forecast: "Ingen værmelding tilgjengelig",
};

use dodona_types::{
    AlphabetShare, ChronologyBucket, CorpusTotals, Dataset, DialectShare, InscriptionExample,
    InscriptionRegion, MapDistrict, MapLandmark, OrthographyRow, Point, Region, RegionId,
    SourceReference, ThemeBucket, VowelCategory, VowelNotationCategory, VowelTheory,
};
use once_cell::sync::Lazy;

static DATASET: Lazy<Dataset> = Lazy::new(build);

/// The shared, compiled-in dataset.
pub fn dataset() -> &'static Dataset {
    &DATASET
}

fn build() -> Dataset {
    Dataset {
        totals: CorpusTotals {
            thessalian: 81,
            thessalian_unique: 75,
            dialect_classified: 806,
            corpus: 4438,
            vowel_evidence: 19,
            span_label: "V–II BC",
        },
        regions: regions(),
        districts: districts(),
        landmarks: landmarks(),
        chronology: chronology(),
        themes: themes(),
        dialects: dialects(),
        alphabets: alphabets(),
        vowel_categories: vowel_categories(),
        inscriptions: inscriptions(),
        orthography: orthography(),
        theories: theories(),
    }
}

#[allow(clippy::too_many_arguments)]
fn region(
    id: RegionId,
    display_name: &'static str,
    short_name: &'static str,
    english_name: &'static str,
    count: u32,
    (certain_count, uncertain_count, name_only_count): (u32, u32, u32),
    (period_v_count, period_transition_count, no_date_count): (u32, u32, u32),
) -> Region {
    Region {
        id,
        display_name,
        short_name,
        english_name,
        count,
        certain_count,
        uncertain_count,
        name_only_count,
        period_v_count,
        period_transition_count,
        no_date_count,
    }
}

fn regions() -> Vec<Region> {
    vec![
        region(
            RegionId::General,
            "Sin adscripción regional",
            "General",
            "Unassigned",
            57,
            (33, 22, 2),
            (21, 14, 22),
        ),
        region(
            RegionId::Pelasgiotis,
            "Pelasgiótide",
            "Pelasg.",
            "Pelasgiotis",
            11,
            (10, 1, 0),
            (3, 3, 5),
        ),
        region(
            RegionId::Histiaiotis,
            "Histiótide",
            "Histiot.",
            "Histiaiotis",
            8,
            (7, 1, 0),
            (1, 4, 3),
        ),
        region(
            RegionId::Thessaliotis,
            "Tesaliótide",
            "Tesaliot.",
            "Thessaliotis",
            5,
            (4, 1, 0),
            (1, 4, 0),
        ),
    ]
}

fn outline(points: &[(f64, f64)]) -> Vec<Point> {
    points.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn districts() -> Vec<MapDistrict> {
    vec![
        MapDistrict {
            id: RegionId::Histiaiotis,
            label: "Histiótide",
            english_name: "Histiaiotis",
            city: "Trikala",
            outline: outline(&[
                (55.0, 42.0),
                (105.0, 28.0),
                (168.0, 32.0),
                (172.0, 58.0),
                (168.0, 90.0),
                (140.0, 108.0),
                (100.0, 112.0),
                (62.0, 100.0),
                (42.0, 75.0),
            ]),
            label_at: Point::new(108.0, 72.0),
            city_at: Point::new(120.0, 58.0),
        },
        MapDistrict {
            id: RegionId::Pelasgiotis,
            label: "Pelasgiótide",
            english_name: "Pelasgiotis",
            city: "Larissa",
            outline: outline(&[
                (168.0, 32.0),
                (230.0, 22.0),
                (290.0, 38.0),
                (305.0, 70.0),
                (295.0, 108.0),
                (260.0, 128.0),
                (210.0, 125.0),
                (168.0, 112.0),
                (168.0, 90.0),
                (172.0, 58.0),
            ]),
            label_at: Point::new(230.0, 75.0),
            city_at: Point::new(240.0, 60.0),
        },
        MapDistrict {
            id: RegionId::Thessaliotis,
            label: "Tesaliótide",
            english_name: "Thessaliotis",
            city: "Pharsalos",
            outline: outline(&[
                (62.0, 100.0),
                (100.0, 112.0),
                (140.0, 108.0),
                (168.0, 112.0),
                (172.0, 140.0),
                (158.0, 172.0),
                (120.0, 190.0),
                (78.0, 180.0),
                (48.0, 155.0),
                (42.0, 125.0),
            ]),
            label_at: Point::new(108.0, 150.0),
            city_at: Point::new(120.0, 138.0),
        },
        MapDistrict {
            id: RegionId::Phthiotis,
            label: "Ftiótide",
            english_name: "Phthiotis",
            city: "Lamia",
            outline: outline(&[
                (168.0, 112.0),
                (210.0, 125.0),
                (260.0, 128.0),
                (278.0, 150.0),
                (272.0, 182.0),
                (240.0, 205.0),
                (190.0, 210.0),
                (152.0, 195.0),
                (120.0, 190.0),
                (158.0, 172.0),
                (172.0, 140.0),
            ]),
            label_at: Point::new(210.0, 162.0),
            city_at: Point::new(218.0, 148.0),
        },
    ]
}

fn landmarks() -> Vec<MapLandmark> {
    vec![
        MapLandmark {
            name: "Olympus",
            at: Point::new(270.0, 28.0),
        },
        MapLandmark {
            name: "Pindus",
            at: Point::new(35.0, 90.0),
        },
        MapLandmark {
            name: "Othrys",
            at: Point::new(195.0, 215.0),
        },
        MapLandmark {
            name: "Ossa",
            at: Point::new(305.0, 88.0),
        },
    ]
}

fn chronology() -> Vec<ChronologyBucket> {
    [
        ("Early V", 3),
        ("1st half V", 7),
        ("Mid V", 4),
        ("2nd half V", 3),
        ("Late V", 9),
        ("V (gen.)", 3),
        ("V–IV", 5),
        ("Early IV", 5),
        ("1st half IV", 3),
        ("Mid IV", 5),
        ("2nd half IV", 3),
        ("Late IV", 2),
        ("III–II", 1),
    ]
    .into_iter()
    .map(|(period_label, inscription_count)| ChronologyBucket {
        period_label,
        inscription_count,
    })
    .collect()
}

fn themes() -> Vec<ThemeBucket> {
    [
        ("Religion", 17, false),
        ("Love / Family", 10, false),
        ("Money", 9, false),
        ("Life / Health", 8, false),
        ("Craft / Trade", 7, false),
        ("Travel", 4, false),
        ("Other", 6, false),
        ("Unknown", 15, true),
    ]
    .into_iter()
    .map(|(theme_name, inscription_count, unknown)| ThemeBucket {
        theme_name,
        inscription_count,
        unknown,
    })
    .collect()
}

fn dialects() -> Vec<DialectShare> {
    [
        ("Doric", 409, false),
        ("Ionic-Attic-Koine", 139, false),
        ("Dialect mix", 110, false),
        ("Thessalian", 81, true),
        ("Doric (Magna Graecia)", 25, false),
        ("Boeotian", 23, false),
        ("Other", 19, false),
    ]
    .into_iter()
    .map(|(dialect_name, inscription_count, highlighted)| DialectShare {
        dialect_name,
        inscription_count,
        highlighted,
    })
    .collect()
}

fn alphabets() -> Vec<AlphabetShare> {
    [
        ("Reformed / Milesian", 70),
        ("Thessalian / Boeotian", 4),
        ("Dodona", 3),
        ("Other (Eub/Cor/El/West)", 4),
    ]
    .into_iter()
    .map(|(alphabet_name, inscription_count)| AlphabetShare {
        alphabet_name,
        inscription_count,
    })
    .collect()
}

fn vowel_categories() -> Vec<VowelNotationCategory> {
    vec![
        VowelNotationCategory {
            category: VowelCategory::Digraphs,
            label: "⟨ΕΙ⟩ ⟨ΟΥ⟩ without ⟨Η⟩ ⟨Ω⟩",
            count: 6,
            description: "Standard Thessalian notation",
            color_token: "#2e7d46",
            source_references: vec![
                SourceReference::dvc("31A"),
                SourceReference::dvc("159A"),
                SourceReference::dvc("1134A"),
                SourceReference::dvc("2015B"),
                SourceReference::dvc("3274A"),
                SourceReference::dvc("3687A"),
            ],
        },
        VowelNotationCategory {
            category: VowelCategory::Mixed,
            label: "⟨ΕΙ⟩ ⟨ΟΥ⟩ + ⟨Η⟩ ⟨Ω⟩",
            count: 9,
            description: "Mixed notations",
            color_token: "#b07520",
            source_references: vec![
                SourceReference::dvc("217A"),
                SourceReference::dvc("219B"),
                SourceReference::dvc("1340A"),
                SourceReference::dvc("2204A"),
                SourceReference::dvc("3002B"),
                SourceReference::dvc("3055A"),
                SourceReference::dvc("3113A"),
                SourceReference::dvc("3545B"),
                SourceReference::lhote("80A"),
            ],
        },
        VowelNotationCategory {
            category: VowelCategory::EtaOmega,
            label: "⟨Η⟩ ⟨Ω⟩ without ⟨ΕΙ⟩ ⟨ΟΥ⟩",
            count: 4,
            description: "Attic / koine notation",
            color_token: "#b04535",
            source_references: vec![
                SourceReference::dvc("556A"),
                SourceReference::dvc("992A"),
                SourceReference::dvc("1416A"),
                SourceReference::lhote("8B"),
            ],
        },
    ]
}

fn example(
    source_reference: SourceReference,
    category: VowelCategory,
    date: &'static str,
    region: InscriptionRegion,
    notable_forms: &'static str,
) -> InscriptionExample {
    InscriptionExample {
        source_reference,
        category,
        date,
        region,
        notable_forms,
    }
}

fn inscriptions() -> Vec<InscriptionExample> {
    use InscriptionRegion as At;
    use RegionId::*;
    use SourceReference as Ref;
    use VowelCategory::*;

    vec![
        example(Ref::dvc("31A"), Digraphs, "Mid IV", At::UNKNOWN, "ἔχου (= Attic ἔχω)"),
        example(
            Ref::dvc("159A"),
            Digraphs,
            "Late V",
            At::certain(Pelasgiotis),
            "Πυρκοτέλεις (= Attic -τέλης)",
        ),
        example(
            Ref::dvc("1134A"),
            Digraphs,
            "1st half IV",
            At::certain(Thessaliotis),
            "ὑγιείς (= Attic ὑγιής)",
        ),
        example(
            Ref::dvc("2015B"),
            Digraphs,
            "1st half IV",
            At::certain(Histiaiotis),
            "σουτειρί[α] (= Attic σωτηρία)",
        ),
        example(Ref::dvc("3274A"), Digraphs, "1st half IV", At::UNKNOWN, "μα[στε]ύουμεν"),
        example(Ref::dvc("3687A"), Digraphs, "Early IV", At::UNKNOWN, "[τί]νι κα θεοῦν εἴει"),
        example(
            Ref::dvc("217A"),
            Mixed,
            "Mid IV",
            At::probable(Histiaiotis),
            "Δου[δουναῖον] + ἦ",
        ),
        example(
            Ref::dvc("219B"),
            Mixed,
            "2nd half IV",
            At::UNKNOWN,
            "τίνι θεοῦ (= Attic θεῷ) + σωτηρί[ας]",
        ),
        example(
            Ref::dvc("1340A"),
            Mixed,
            "Late IV",
            At::probable(Histiaiotis),
            "εἶ + γαοργέω",
        ),
        example(
            Ref::dvc("2204A"),
            Mixed,
            "Late V",
            At::probable(Histiaiotis),
            "Δουδωναίει (hybrid dative)",
        ),
        example(Ref::dvc("3002B"), Mixed, "1st half IV", At::UNKNOWN, "γαοργέουμ̣[εν] + ἦ"),
        example(Ref::dvc("3055A"), Mixed, "c. 350", At::UNKNOWN, "Κούας (= Κώιας?) + Διώνα"),
        example(
            Ref::dvc("3113A"),
            Mixed,
            "Late IV",
            At::certain(Pelasgiotis),
            "εἶ, σούσεται + [Δι]ώνηι",
        ),
        example(Ref::dvc("3545B"), Mixed, "Late V", At::UNKNOWN, "κί̣νι κε + [μ]αντήαν"),
        example(
            Ref::lhote("80A"),
            Mixed,
            "c. 375",
            At::UNKNOWN,
            "ἐρουτᾶι + Διώναν, ὠφέλιμον",
        ),
        example(
            Ref::dvc("556A"),
            EtaOmega,
            "Late IV",
            At::certain(Pelasgiotis),
            "ἀρρωστήσαεν + ἀρρωστεματος",
        ),
        example(
            Ref::dvc("992A"),
            EtaOmega,
            "2nd half IV",
            At::probable(Thessaliotis),
            "κε + Μέννη (name frequently attested in Thessaly) → only systematic case",
        ),
        example(
            Ref::dvc("1416A"),
            EtaOmega,
            "1st half IV",
            At::certain(Pelasgiotis),
            "Μελανθίων + θεο͂ν",
        ),
        example(
            Ref::lhote("8B"),
            EtaOmega,
            "III–II",
            At::certain(Pelasgiotis),
            "Μον[δ]α̣ιατᾶν τὸ κοινὸν + Νάωι, Διώναι{ς} (local Doric?)",
        ),
    ]
}

fn orthography() -> Vec<OrthographyRow> {
    [
        ("*ē", "⟨Ε⟩", "⟨ΕΙ⟩", "⟨Η⟩"),
        ("*ĕ + ĕ", "⟨Ε⟩", "⟨ΕΙ⟩", "⟨ΕΙ⟩"),
        ("*ĕ", "⟨Ε⟩", "⟨Ε⟩", "⟨Ε⟩"),
        ("*ei̯", "⟨ΕΙ⟩", "⟨ΕΙ⟩", "⟨ΕΙ⟩"),
        ("*ō", "⟨Ο⟩", "⟨ΟΥ⟩", "⟨Ω⟩"),
        ("*ŏ + ŏ", "⟨Ο⟩", "⟨ΟΥ⟩", "⟨ΟΥ⟩"),
        ("*ŏ", "⟨Ο⟩", "⟨Ο⟩", "⟨Ο⟩"),
        ("*ou̯", "⟨ΟΥ⟩", "⟨ΟΥ⟩ / ⟨Υ⟩", "⟨ΟΥ⟩"),
    ]
    .into_iter()
    .map(|(etymon, archaic, reformed, attic)| OrthographyRow {
        etymon,
        archaic,
        reformed,
        attic,
    })
    .collect()
}

fn theories() -> Vec<VowelTheory> {
    vec![
        VowelTheory {
            author: "Bechtel (1921) / Buck (1910)",
            title: "Parallel raising",
            summary: "⟨ΕΙ⟩ and ⟨ΟΥ⟩ stand for close vowels /eː/ and /oː/, as in Attic. Thessalian \
                      would have undergone a parallel raising, ending in a doris severior type \
                      system with five close long vowels.",
        },
        VowelTheory {
            author: "Bartoněk (1966)",
            title: "Chain shift",
            summary: "A raising of /aː/ pushed the other long vowels upwards. The inherited \
                      mid-long vowels ended up as close /eː/ and /oː/.",
        },
        VowelTheory {
            author: "Scarborough (2014)",
            title: "Central mid vowels",
            summary: "⟨ΕΙ⟩ and ⟨ΟΥ⟩ stand for true mid vowels /e̞ː/ and /o̞ː/, not close ones. \
                      A unique doris severior system where the mid vowels keep their central \
                      quality; the digraphs are a spelling convention, not phonetic raising.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_is_shared() {
        assert!(std::ptr::eq(dataset(), dataset()));
    }

    #[test]
    fn test_phthiotis_is_mapped_but_has_no_data() {
        let data = dataset();
        assert!(data.district(RegionId::Phthiotis).is_some());
        assert!(!data.has_data(RegionId::Phthiotis));
    }

    #[test]
    fn test_general_has_data_but_no_district() {
        let data = dataset();
        assert!(data.has_data(RegionId::General));
        assert!(data.district(RegionId::General).is_none());
    }

    #[test]
    fn test_pelasgiotis_record() {
        let region = dataset().region(RegionId::Pelasgiotis).unwrap();
        assert_eq!(region.count, 11);
        assert_eq!(region.english_name, "Pelasgiotis");
    }

    #[test]
    fn test_navigable_regions_order() {
        assert_eq!(
            dataset().navigable_regions(),
            vec![
                RegionId::Histiaiotis,
                RegionId::Pelasgiotis,
                RegionId::Thessaliotis,
                RegionId::Phthiotis,
                RegionId::General,
            ]
        );
    }

    #[test]
    fn test_vowel_table_has_one_row_per_reference() {
        let data = dataset();
        let references: usize = data
            .vowel_categories
            .iter()
            .map(|c| c.source_references.len())
            .sum();
        assert_eq!(references, data.inscriptions.len());
        assert_eq!(data.inscriptions.len() as u32, data.totals.vowel_evidence);
    }
}

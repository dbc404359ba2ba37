//! Tests de la machine à états : séquences de touches comme à l’écran.
//!
//! Notation des séquences : chiffres, `+ - * /`, `=` et `C` ; les espaces sont ignorés.

use super::affichage::{Affichage, ErreurCalcul};
use super::machine::{Effet, EtatCalc};
use super::operateur::Operateur;

fn touche(etat: &EtatCalc, c: char) -> (EtatCalc, Effet) {
    let t = match c {
        '0'..='9' => etat.chiffre(c as u8 - b'0'),
        '+' => etat.operateur_choisi(Operateur::Addition),
        '-' => etat.operateur_choisi(Operateur::Soustraction),
        '*' => etat.operateur_choisi(Operateur::Multiplication),
        '/' => etat.operateur_choisi(Operateur::Division),
        '=' => etat.egal(),
        'C' => etat.effacer(),
        autre => panic!("touche inconnue: {autre:?}"),
    };
    (t.etat, t.effet)
}

/// Joue une séquence depuis `depart` ; rend l’état final + les effets non triviaux.
fn jouer_depuis(depart: EtatCalc, touches: &str) -> (EtatCalc, Vec<Effet>) {
    let mut etat = depart;
    let mut effets = Vec::new();
    for c in touches.chars().filter(|c| !c.is_whitespace()) {
        let (suivant, effet) = touche(&etat, c);
        if effet != Effet::Aucun {
            effets.push(effet);
        }
        etat = suivant;
    }
    (etat, effets)
}

fn jouer(touches: &str) -> (EtatCalc, Vec<Effet>) {
    jouer_depuis(EtatCalc::new(1025), touches)
}

fn ecran(touches: &str) -> String {
    jouer(touches).0.affichage().texte()
}

fn recherches(effets: &[Effet]) -> Vec<i64> {
    effets
        .iter()
        .filter_map(|e| match e {
            Effet::Rechercher(id) => Some(*id),
            _ => None,
        })
        .collect()
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn saisie_sans_zero_de_tete() {
    assert_eq!(ecran("123"), "123");
    assert_eq!(ecran("0"), "0");
    assert_eq!(ecran("007"), "7");
    assert_eq!(ecran("70"), "70");
}

#[test]
fn chiffre_hors_pave_ignore() {
    let etat = EtatCalc::new(1025);
    let t = etat.chiffre(12);
    assert_eq!(t.etat, etat);
    assert_eq!(t.effet, Effet::Aucun);
}

#[test]
fn apres_operateur_le_chiffre_repart_de_zero() {
    let (etat, _) = jouer("12 + 3");
    assert_eq!(etat.affichage().texte(), "3");
    assert!(!etat.attente_second());
    assert_eq!(etat.operande(), Some(12.0));
    assert_eq!(etat.operateur(), Some(Operateur::Addition));
}

/* ------------------------ Opérateurs ------------------------ */

#[test]
fn operateur_deux_fois_remplace_sans_evaluer() {
    let (etat, _) = jouer("5 + *");
    assert_eq!(etat.operande(), Some(5.0));
    assert_eq!(etat.operateur(), Some(Operateur::Multiplication));
    assert!(etat.attente_second());

    let (etat, effets) = jouer("5 + * 3 =");
    assert_eq!(etat.affichage().texte(), "15");
    assert_eq!(recherches(&effets), vec![15]);
}

#[test]
fn enchainement_evalue_au_fil_de_l_eau() {
    let (etat, effets) = jouer("2 + 3 *");
    assert_eq!(etat.affichage().texte(), "5");
    assert_eq!(etat.operande(), Some(5.0));
    assert!(effets.is_empty(), "pas de recherche sur un enchaînement");

    assert_eq!(ecran("2 + 3 * 4 ="), "20");
    assert_eq!(ecran("9 - 4 - 2 ="), "3");
}

#[test]
fn enchainement_division_par_zero_gardee() {
    let (etat, effets) = jouer("8 / 0 +");
    assert_eq!(
        etat.affichage(),
        &Affichage::Erreur(ErreurCalcul::DivisionParZero)
    );
    assert_eq!(etat.operande(), None);
    assert_eq!(etat.operateur(), Some(Operateur::Addition));
    assert_eq!(effets, vec![Effet::Reinitialiser]);

    // "=" n’a plus d’opérande : rien ne se passe.
    let (apres, effets) = jouer_depuis(etat.clone(), "=");
    assert_eq!(apres, etat);
    assert!(effets.is_empty());
}

#[test]
fn enchainement_hors_pokedex() {
    let (etat, effets) = jouer("2000 + 1 +");
    assert_eq!(
        etat.affichage(),
        &Affichage::Erreur(ErreurCalcul::HorsPokedex { limite: 1025 })
    );
    assert_eq!(etat.operande(), None);
    assert_eq!(effets, vec![Effet::Reinitialiser]);
}

#[test]
fn operateur_sur_erreur_sans_effet() {
    let (erreur, _) = jouer("8 / 0 =");
    let t = erreur.operateur_choisi(Operateur::Addition);
    assert_eq!(t.etat, erreur);
    assert_eq!(t.effet, Effet::Aucun);
}

/* ------------------------ Égal ------------------------ */

#[test]
fn egal_sans_operateur_est_neutre() {
    let (avant, _) = jouer("5");
    let (apres, effets) = jouer("5 =");
    assert_eq!(avant, apres);
    assert!(effets.is_empty());
}

#[test]
fn egal_sans_second_operande_est_neutre() {
    let (avant, _) = jouer("5 +");
    let (apres, effets) = jouer("5 + =");
    assert_eq!(avant, apres);
    assert!(effets.is_empty());
}

#[test]
fn division_par_zero_texte_fixe_sans_recherche() {
    let (etat, effets) = jouer("8 / 0 =");
    assert_eq!(etat.affichage().texte(), "Impossible de diviser par zéro !");
    assert_eq!(etat.operande(), None);
    assert_eq!(etat.operateur(), None);
    assert!(!etat.attente_second());
    assert!(recherches(&effets).is_empty());
    assert_eq!(effets, vec![Effet::Reinitialiser]);
}

#[test]
fn resultat_hors_pokedex_sans_recherche() {
    let (etat, effets) = jouer("2000 + 0 =");
    assert_eq!(etat.affichage().texte(), "Erreur : au-delà du Pokédex n°1025 !");
    assert!(recherches(&effets).is_empty());
    assert_eq!(effets, vec![Effet::Reinitialiser]);
}

#[test]
fn limite_exacte_acceptee() {
    let (etat, effets) = jouer("1000 + 25 =");
    assert_eq!(etat.affichage().texte(), "1025");
    assert_eq!(recherches(&effets), vec![1025]);
}

#[test]
fn limite_configurable() {
    let (etat, effets) = jouer_depuis(EtatCalc::new(151), "100 + 52 =");
    assert_eq!(etat.affichage().texte(), "Erreur : au-delà du Pokédex n°151 !");
    assert!(recherches(&effets).is_empty());
}

#[test]
fn succes_recherche_une_seule_fois_le_plancher() {
    let (etat, effets) = jouer("5 + 20 =");
    assert_eq!(etat.affichage().texte(), "25");
    assert_eq!(effets, vec![Effet::Rechercher(25)]);
    assert_eq!(etat.operande(), None);
    assert_eq!(etat.operateur(), None);

    let (etat, effets) = jouer("7 / 2 =");
    assert_eq!(etat.affichage().texte(), "3.5");
    assert_eq!(recherches(&effets), vec![3]);

    // Le plancher d’un négatif part vers le bas ; la recherche refusera ce numéro.
    let (_, effets) = jouer("2 - 7 / 2 =");
    assert_eq!(recherches(&effets), vec![-3]);
}

#[test]
fn arrondi_quinze_chiffres_a_l_affichage() {
    assert_eq!(ecran("1 / 3 ="), "0.333333333333333");
    assert_eq!(ecran("2 / 3 ="), "0.666666666666667");
}

/* ------------------------ Après une erreur ------------------------ */

#[test]
fn chiffre_apres_erreur_repart_a_neuf() {
    let (etat, effets) = jouer("2000 + 0 = 7");
    assert_eq!(etat.affichage().texte(), "7");
    assert_eq!(etat.operande(), None);
    assert_eq!(etat.operateur(), None);
    // Seul le "=" a touché le panneau ; le chiffre ne le touche pas.
    assert_eq!(effets, vec![Effet::Reinitialiser]);

    assert_eq!(ecran("8 / 0 = 4 + 4 ="), "8");
}

#[test]
fn chiffre_apres_resultat_concatene() {
    assert_eq!(ecran("5 + 20 = 3"), "253");
}

/* ------------------------ Effacer ------------------------ */

#[test]
fn effacer_idempotent() {
    let initial = EtatCalc::new(1025);
    let (une, effets_une) = jouer("12 * 3 C");
    let (deux, effets_deux) = jouer("12 * 3 C C");
    assert_eq!(une, initial);
    assert_eq!(deux, initial);
    assert_eq!(effets_une, vec![Effet::Reinitialiser]);
    assert_eq!(effets_deux, vec![Effet::Reinitialiser, Effet::Reinitialiser]);
}

/* ------------------------ Aller-retour ------------------------ */

#[test]
fn plus_n_moins_n_revient_au_depart() {
    // Départs : entiers saisis + quelques résultats décimaux.
    let departs = ["0", "1", "42", "999", "1 / 3 =", "7 / 2 =", "1 / 7 ="];
    for depart in departs {
        let (etat_v, _) = jouer(depart);
        let v = etat_v.affichage().valeur().expect("départ numérique");
        // v + n reste sous la limite (sinon l’enchaînement tombe en erreur).
        for n in [1, 7, 25] {
            let seq = format!("+ {n} - {n} =");
            let (fin, _) = jouer_depuis(etat_v.clone(), &seq);
            let r = fin
                .affichage()
                .valeur()
                .unwrap_or_else(|| panic!("départ={depart:?} n={n}: {}", fin.affichage().texte()));
            let tolerance = 1e-13 * v.abs().max(f64::from(n));
            assert!(
                (r - v).abs() <= tolerance,
                "départ={depart:?} n={n} v={v} r={r}"
            );
        }
    }
}

#[test]
fn operation_en_cours_lisible() {
    let (etat, _) = jouer("5 *");
    assert_eq!(etat.operation_en_cours(), "5 ×");
    assert_eq!(jouer("5").0.operation_en_cours(), "");
}

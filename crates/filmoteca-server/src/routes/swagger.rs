//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    // Actor models
    ActorResponse,
    // Director models
    DirectorResponse,
    // Movie models
    MovieResponse,
    RegisterActorRequest,
    RegisterDirectorRequest,
    RegisterMovieRequest,
    UpdateActorRequest,
    UpdateDirectorRequest,
    UpdateMovieRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Movie endpoints
        super::movie::search_movies,
        super::movie::register_movie,
        super::movie::update_movie,
        super::movie::delete_movie,
        // Actor endpoints
        super::actor::search_actors,
        super::actor::register_actor,
        super::actor::update_actor,
        super::actor::delete_actor,
        // Director endpoints
        super::director::search_directors,
        super::director::register_director,
        super::director::update_director,
        super::director::delete_director,
    ),
    components(schemas(
        MovieResponse,
        RegisterMovieRequest,
        UpdateMovieRequest,
        ActorResponse,
        RegisterActorRequest,
        UpdateActorRequest,
        DirectorResponse,
        RegisterDirectorRequest,
        UpdateDirectorRequest,
    )),
    tags(
        (name = "Movie", description = "Film catalog"),
        (name = "Actor", description = "Performer catalog"),
        (name = "Director", description = "Director catalog"),
    ),
    info(
        title = "Filmoteca API",
        version = "0.1.0",
        description = "Film catalog API - search, register, update, and delete movies, actors, and directors.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
)]
pub struct ApiDoc;
